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

//! A single deck stack.
//!
//! `Stack` is a last-in-first-out column of containers that all share one
//! category and never grows beyond its maximum height. Index `0` is the
//! bottom (loaded first); the last element is the top, the only container the
//! crane can reach.
//!
//! Only the [`Manifest`](crate::manifest::Manifest) mutates stacks; callers
//! get read access through borrowed views.

use num_traits::CheckedAdd;
use stowage_model::{cargo::Cargo, index::TierIndex};

/// The summary of a stack the placement scan looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy<K> {
    Empty,
    Occupied { height: usize, category: K },
}

impl<K> Occupancy<K> {
    /// Returns `true` if the stack holds no containers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupancy::Empty)
    }

    /// Returns the number of containers in the stack.
    #[inline]
    pub fn height(&self) -> usize {
        match self {
            Occupancy::Empty => 0,
            Occupancy::Occupied { height, .. } => *height,
        }
    }
}

/// A homogeneous, height-capped LIFO stack of containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<C> {
    items: Vec<C>,
    max_height: usize,
}

impl<C> Stack<C>
where
    C: Cargo,
{
    /// Creates a new, empty stack capped at `max_height` containers.
    #[inline]
    pub fn new(max_height: usize) -> Self {
        Self {
            items: Vec::new(),
            max_height,
        }
    }

    /// Returns the number of containers in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no containers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if no further container fits on this stack.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_height
    }

    /// Returns the maximum number of containers this stack may hold.
    #[inline]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Returns the container on top of the stack, if any.
    #[inline]
    pub fn top(&self) -> Option<&C> {
        self.items.last()
    }

    /// Returns the container at the bottom of the stack, if any.
    #[inline]
    pub fn bottom(&self) -> Option<&C> {
        self.items.first()
    }

    /// Returns the container at `tier`, if the stack is that high.
    #[inline]
    pub fn get(&self, tier: TierIndex) -> Option<&C> {
        self.items.get(tier.get())
    }

    /// Returns the containers bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.items
    }

    /// Returns an iterator over the containers, bottom first.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.items.iter()
    }

    /// Returns the category shared by every container in the stack, or
    /// `None` if the stack is empty.
    #[inline]
    pub fn category(&self) -> Option<C::Category> {
        self.top().map(Cargo::category)
    }

    /// Returns the tier holding the container with identifier `id`.
    pub fn tier_of(&self, id: &C::Id) -> Option<TierIndex> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .map(TierIndex::new)
    }

    /// Returns `true` if the container with identifier `id` is on top.
    #[inline]
    pub fn is_top(&self, id: &C::Id) -> bool {
        self.top().is_some_and(|item| item.id() == id)
    }

    /// Returns the placement summary of this stack.
    #[inline]
    pub fn occupancy(&self) -> Occupancy<C::Category> {
        match self.top() {
            None => Occupancy::Empty,
            Some(top) => Occupancy::Occupied {
                height: self.items.len(),
                category: top.category(),
            },
        }
    }

    /// Returns `true` if a container of `category` may be placed on top.
    ///
    /// The stack must have room, and it must either be empty or be topped by
    /// the same category.
    #[inline]
    pub fn accepts(&self, category: C::Category) -> bool {
        if self.is_full() {
            return false;
        }
        match self.occupancy() {
            Occupancy::Empty => true,
            Occupancy::Occupied { category: top, .. } => top == category,
        }
    }

    /// Returns the summed gross weight of the stack, or `None` on overflow.
    pub fn total_weight(&self) -> Option<C::Weight> {
        self.items
            .iter()
            .try_fold(num_traits::zero(), |acc: C::Weight, item| {
                acc.checked_add(&item.gross_weight())
            })
    }

    /// Places `item` on top of the stack.
    ///
    /// The caller must have checked [`Stack::accepts`].
    #[inline]
    pub(crate) fn push(&mut self, item: C) {
        debug_assert!(
            self.accepts(item.category()),
            "called `Stack::push` with an item the stack does not accept: height {} of {}, top {:?}, item {:?}",
            self.items.len(),
            self.max_height,
            self.category(),
            item.category()
        );

        self.items.push(item);
    }

    /// Removes and returns the top container.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<C> {
        self.items.pop()
    }
}

impl<'a, C> IntoIterator for &'a Stack<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<C> std::fmt::Display for Stack<C>
where
    C: Cargo,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack(height: {}/{}", self.items.len(), self.max_height)?;
        match self.category() {
            Some(category) => write!(f, ", category: {:?})", category),
            None => write!(f, ", empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowage_model::{
        code::ContainerCode,
        container::{Category, FreightContainer},
    };

    fn code(serial: u32) -> ContainerCode {
        ContainerCode::from_parts("MSC", serial).unwrap()
    }

    fn general(serial: u32, weight: u32) -> FreightContainer {
        FreightContainer::general(code(serial), weight).unwrap()
    }

    fn reefer(serial: u32, weight: u32) -> FreightContainer {
        FreightContainer::refrigerated(code(serial), weight, -18).unwrap()
    }

    #[test]
    fn test_new_stack_is_empty() {
        let s: Stack<FreightContainer> = Stack::new(3);
        assert!(s.is_empty());
        assert!(!s.is_full());
        assert_eq!(s.len(), 0);
        assert_eq!(s.max_height(), 3);
        assert_eq!(s.top(), None);
        assert_eq!(s.bottom(), None);
        assert_eq!(s.category(), None);
        assert_eq!(s.occupancy(), Occupancy::Empty);
        assert_eq!(s.total_weight(), Some(0));
        assert_eq!(s.to_string(), "Stack(height: 0/3, empty)");
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut s = Stack::new(3);
        s.push(general(1, 5));
        s.push(general(2, 6));
        s.push(general(3, 7));

        assert!(s.is_full());
        assert_eq!(s.bottom().map(|c| c.code()), Some(&code(1)));
        assert_eq!(s.top().map(|c| c.code()), Some(&code(3)));
        assert_eq!(s.total_weight(), Some(18));

        assert_eq!(s.pop().map(|c| c.code().clone()), Some(code(3)));
        assert_eq!(s.pop().map(|c| c.code().clone()), Some(code(2)));
        assert_eq!(s.pop().map(|c| c.code().clone()), Some(code(1)));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_tier_lookup_counts_from_bottom() {
        let mut s = Stack::new(4);
        s.push(general(1, 5));
        s.push(general(2, 5));

        assert_eq!(s.tier_of(&code(1)), Some(TierIndex::new(0)));
        assert_eq!(s.tier_of(&code(2)), Some(TierIndex::new(1)));
        assert_eq!(s.tier_of(&code(9)), None);
        assert_eq!(s.get(TierIndex::new(1)).map(|c| c.code()), Some(&code(2)));
        assert_eq!(s.get(TierIndex::new(2)), None);
        assert!(s.is_top(&code(2)));
        assert!(!s.is_top(&code(1)));
    }

    #[test]
    fn test_accepts_only_matching_category_with_room() {
        let mut s = Stack::new(2);
        assert!(s.accepts(Category::General));
        assert!(s.accepts(Category::Refrigerated));

        s.push(reefer(1, 10));
        assert!(s.accepts(Category::Refrigerated));
        assert!(!s.accepts(Category::General));
        assert!(!s.accepts(Category::Dangerous));

        s.push(reefer(2, 10));
        assert!(!s.accepts(Category::Refrigerated));
        assert_eq!(
            s.occupancy(),
            Occupancy::Occupied {
                height: 2,
                category: Category::Refrigerated
            }
        );
        assert_eq!(s.to_string(), "Stack(height: 2/2, category: Refrigerated)");
    }

    #[test]
    fn test_zero_height_stack_accepts_nothing() {
        let s: Stack<FreightContainer> = Stack::new(0);
        assert!(s.is_full());
        for category in Category::ALL {
            assert!(!s.accepts(category));
        }
    }

    #[test]
    fn test_iteration_is_bottom_first() {
        let mut s = Stack::new(3);
        s.push(general(1, 5));
        s.push(general(2, 5));
        let codes: Vec<_> = (&s).into_iter().map(|c| c.code().clone()).collect();
        assert_eq!(codes, vec![code(1), code(2)]);
        assert_eq!(s.as_slice().len(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `Stack::push` with an item the stack does not accept")]
    fn test_push_mixed_category_panics_in_debug() {
        let mut s = Stack::new(3);
        s.push(general(1, 5));
        s.push(reefer(2, 5));
    }
}
