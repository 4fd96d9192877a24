// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Error kinds reported by manifest operations.
//!
//! Every operation has its own closed enumeration so callers can branch on the
//! kind of failure. A returned error always means the manifest is unchanged.

use crate::manifest::Location;
use thiserror::Error;

/// Construction was given capacity parameters that cannot describe a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{parameter} must not be negative, got {value}")]
    Negative {
        parameter: &'static str,
        value: String,
    },
    #[error("{parameter} of {value} does not fit the address space")]
    TooLarge {
        parameter: &'static str,
        value: String,
    },
}

/// A container could not be loaded.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError<W> {
    /// A container with the same identifier is already on board.
    #[error("a container with code {id} is already on board")]
    DuplicateIdentifier { id: String },
    /// Loading would push the total on-board weight past the ceiling.
    #[error(
        "loading {id} ({incoming}) onto {current} on board would exceed the weight limit of {max_weight}"
    )]
    WeightLimit {
        id: String,
        current: W,
        incoming: W,
        max_weight: W,
    },
    /// No stack is empty or topped by the same category with room to spare.
    #[error("no suitable space can be found for container {id}")]
    NoSpace { id: String },
}

/// A container could not be unloaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnloadError {
    /// The container is not on board, or it is buried below another one.
    /// `location` is set when the container was found but is not on top.
    #[error("container {id} is not on top of any stack or is not on board")]
    InaccessibleOrAbsent {
        id: String,
        location: Option<Location>,
    },
}

/// A stack was addressed outside the configured slot range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackIndexError {
    #[error("there is no stack {index} on this ship, it has {num_stacks} stacks")]
    InvalidStackIndex { index: usize, num_stacks: usize },
}

/// Any manifest error, for callers that want a single error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError<W> {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Load(#[from] LoadError<W>),
    #[error(transparent)]
    Unload(#[from] UnloadError),
    #[error(transparent)]
    StackIndex(#[from] StackIndexError),
}

/// A `Result` alias over [`ManifestError`].
pub type ManifestResult<T, W> = std::result::Result<T, ManifestError<W>>;

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_model::index::{StackIndex, TierIndex};

    #[test]
    fn test_load_error_messages() {
        let dup: LoadError<u32> = LoadError::DuplicateIdentifier {
            id: "MSCU6639871".to_string(),
        };
        assert_eq!(
            dup.to_string(),
            "a container with code MSCU6639871 is already on board"
        );

        let weight: LoadError<u32> = LoadError::WeightLimit {
            id: "G".to_string(),
            current: 20,
            incoming: 15,
            max_weight: 30,
        };
        assert_eq!(
            weight.to_string(),
            "loading G (15) onto 20 on board would exceed the weight limit of 30"
        );
    }

    #[test]
    fn test_unload_error_keeps_location() {
        let location = Location::new(StackIndex::new(1), TierIndex::new(0));
        let err = UnloadError::InaccessibleOrAbsent {
            id: "P".to_string(),
            location: Some(location),
        };
        assert!(err.to_string().contains("not on top"));
        let UnloadError::InaccessibleOrAbsent { location: found, .. } = err;
        assert_eq!(found, Some(location));
    }

    #[test]
    fn test_umbrella_conversion_is_transparent() {
        let inner = StackIndexError::InvalidStackIndex {
            index: 5,
            num_stacks: 2,
        };
        let outer: ManifestError<u32> = inner.into();
        assert_eq!(outer.to_string(), inner.to_string());
        assert!(matches!(outer, ManifestError::StackIndex(_)));
    }
}
