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

//! # Strongly Typed Indices
//!
//! Phantom-typed wrappers around `usize` that keep the two index spaces of a
//! manifest apart: deck slots (`StackIndex`) and positions within a stack
//! (`TierIndex`). Both compile down to a transparent `usize`.
//!
//! ```rust
//! use stowage_model::index::{StackIndex, TierIndex};
//!
//! let slot = StackIndex::new(3);
//! let tier = TierIndex::new(0);
//! assert_eq!(slot.get(), 3);
//! assert_eq!(tier.get(), 0);
//! assert_eq!(format!("{}", slot), "StackIndex(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index that is associated with a specific tag type `T`.
///
/// The tag only exists at the type level, so a `StackIndex` can never be
/// passed where a `TierIndex` is expected.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

/// A tag type for deck slot indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StackIndexTag;

impl TypedIndexTag for StackIndexTag {
    const NAME: &'static str = "StackIndex";
}

/// A typed index for deck slots. Slot 0 is nearest the bridge and has the
/// highest loading priority.
pub type StackIndex = TypedIndex<StackIndexTag>;

/// A tag type for tier indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TierIndexTag;

impl TypedIndexTag for TierIndexTag {
    const NAME: &'static str = "TierIndex";
}

/// A typed index for the position of a container within its stack.
/// Tier 0 is the bottom of the stack.
pub type TierIndex = TypedIndex<TierIndexTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        assert_eq!(StackIndex::new(10).get(), 10);
        assert_eq!(TierIndex::new(0).get(), 0);
    }

    #[test]
    fn test_conversions() {
        let slot: StackIndex = 42.into();
        assert_eq!(slot.get(), 42);

        let raw: usize = slot.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display_use_tag_name() {
        assert_eq!(format!("{}", StackIndex::new(7)), "StackIndex(7)");
        assert_eq!(format!("{:?}", StackIndex::new(7)), "StackIndex(7)");
        assert_eq!(format!("{}", TierIndex::new(2)), "TierIndex(2)");
    }

    #[test]
    fn test_ordering_follows_underlying_index() {
        let mut slots = vec![StackIndex::new(3), StackIndex::new(0), StackIndex::new(1)];
        slots.sort();
        assert_eq!(
            slots,
            vec![StackIndex::new(0), StackIndex::new(1), StackIndex::new(3)]
        );
    }
}
