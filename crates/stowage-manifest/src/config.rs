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

//! Voyage capacity parameters.
//!
//! The deck configuration, the weather, and the ballast carried for a voyage
//! fix three numbers before anything is loaded: how many stacks fit on deck,
//! how high any stack may grow, and how much cargo weight the ship may carry.
//! They never change for the lifetime of a manifest.

use crate::error::ConfigurationError;
use num_traits::PrimInt;
use std::fmt::Display;

/// Validated capacity parameters for a [`Manifest`](crate::manifest::Manifest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestConfig<W> {
    num_stacks: usize,
    max_height: usize,
    max_weight: W,
}

#[inline]
fn non_negative_count<N>(parameter: &'static str, value: N) -> Result<usize, ConfigurationError>
where
    N: PrimInt + Display,
{
    if value < N::zero() {
        return Err(ConfigurationError::Negative {
            parameter,
            value: value.to_string(),
        });
    }

    value.to_usize().ok_or_else(|| ConfigurationError::TooLarge {
        parameter,
        value: value.to_string(),
    })
}

impl<W> ManifestConfig<W>
where
    W: PrimInt + Display,
{
    /// Validates raw capacity parameters.
    ///
    /// Counts may be given in any primitive integer type; zero is allowed for
    /// every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Negative`] for the first negative
    /// parameter (checked as `num_stacks`, `max_height`, `max_weight`), or
    /// [`ConfigurationError::TooLarge`] if a count does not fit `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stowage_manifest::config::ManifestConfig;
    ///
    /// let config = ManifestConfig::new(4, 3, 120u32).unwrap();
    /// assert_eq!(config.num_stacks(), 4);
    /// assert!(ManifestConfig::new(-1, 3, 120u32).is_err());
    /// ```
    pub fn new<N>(num_stacks: N, max_height: N, max_weight: W) -> Result<Self, ConfigurationError>
    where
        N: PrimInt + Display,
    {
        let num_stacks = non_negative_count("num_stacks", num_stacks)?;
        let max_height = non_negative_count("max_height", max_height)?;
        if max_weight < W::zero() {
            return Err(ConfigurationError::Negative {
                parameter: "max_weight",
                value: max_weight.to_string(),
            });
        }

        Ok(Self {
            num_stacks,
            max_height,
            max_weight,
        })
    }

    /// Returns the number of stacks on deck.
    #[inline]
    pub fn num_stacks(&self) -> usize {
        self.num_stacks
    }

    /// Returns the maximum number of containers in any one stack.
    #[inline]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Returns the total weight ceiling.
    #[inline]
    pub fn max_weight(&self) -> W {
        self.max_weight
    }
}

impl<W> std::fmt::Display for ManifestConfig<W>
where
    W: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ManifestConfig(num_stacks: {}, max_height: {}, max_weight: {})",
            self.num_stacks, self.max_height, self.max_weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters_are_kept() {
        let config = ManifestConfig::new(2, 5, 30u32).unwrap();
        assert_eq!(config.num_stacks(), 2);
        assert_eq!(config.max_height(), 5);
        assert_eq!(config.max_weight(), 30);
    }

    #[test]
    fn test_zero_is_allowed_everywhere() {
        let config = ManifestConfig::new(0, 0, 0i64).unwrap();
        assert_eq!(config.num_stacks(), 0);
        assert_eq!(config.max_height(), 0);
        assert_eq!(config.max_weight(), 0);
    }

    #[test]
    fn test_negative_parameters_are_rejected_in_order() {
        assert_eq!(
            ManifestConfig::new(-1, -2, -3i32),
            Err(ConfigurationError::Negative {
                parameter: "num_stacks",
                value: "-1".to_string()
            })
        );
        assert_eq!(
            ManifestConfig::new(1, -2, -3i32),
            Err(ConfigurationError::Negative {
                parameter: "max_height",
                value: "-2".to_string()
            })
        );
        assert_eq!(
            ManifestConfig::new(1, 2, -3i32),
            Err(ConfigurationError::Negative {
                parameter: "max_weight",
                value: "-3".to_string()
            })
        );
    }

    #[test]
    fn test_counts_wider_than_usize_are_rejected() {
        let huge = u128::MAX;
        assert!(matches!(
            ManifestConfig::new(huge, 1, 10u32),
            Err(ConfigurationError::TooLarge {
                parameter: "num_stacks",
                ..
            })
        ));
    }

    #[test]
    fn test_display() {
        let config = ManifestConfig::new(2u8, 3u8, 40u32).unwrap();
        assert_eq!(
            config.to_string(),
            "ManifestConfig(num_stacks: 2, max_height: 3, max_weight: 40)"
        );
    }
}
