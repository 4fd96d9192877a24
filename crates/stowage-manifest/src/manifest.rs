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

//! The cargo manifest of a single voyage.
//!
//! A `Manifest` owns a fixed row of deck stacks and enforces the loading
//! rules across all of them:
//!
//! 1. No two containers on board share an identifier.
//! 2. The summed gross weight never exceeds the voyage's weight ceiling.
//! 3. No stack grows beyond the maximum height.
//! 4. Every stack holds a single category.
//! 5. Only the top container of a stack can be unloaded.
//!
//! New containers go as close to the bridge as possible: the placement scan
//! walks the stacks from index `0` upward and takes the first stack that is
//! either empty or topped by the same category with room to spare. Earlier
//! stacks always win, even if a later stack of the same category has room.
//!
//! Every operation either succeeds completely or returns an error and leaves
//! the manifest untouched. All checks run against the current state before
//! anything is written.

use crate::{
    config::ManifestConfig,
    error::{ConfigurationError, LoadError, StackIndexError, UnloadError},
    stack::Stack,
};
use log::{debug, trace};
use num_traits::{CheckedAdd, PrimInt, Saturating};
use rustc_hash::FxHashMap;
use std::fmt::Display;
use stowage_model::{
    cargo::Cargo,
    index::{StackIndex, TierIndex},
};

/// Where a container sits on deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    stack: StackIndex,
    tier: TierIndex,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(stack: StackIndex, tier: TierIndex) -> Self {
        Self { stack, tier }
    }

    /// Returns the stack holding the container.
    #[inline]
    pub const fn stack(&self) -> StackIndex {
        self.stack
    }

    /// Returns the container's height in its stack, counting from zero.
    #[inline]
    pub const fn tier(&self) -> TierIndex {
        self.tier
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stack {}, tier {}", self.stack.get(), self.tier.get())
    }
}

/// A container ship's cargo manifest.
///
/// # Examples
///
/// ```rust
/// use stowage_manifest::manifest::Manifest;
/// use stowage_model::{code::ContainerCode, container::FreightContainer, index::StackIndex};
///
/// let mut manifest = Manifest::new(2, 2, 50).unwrap();
/// let code = ContainerCode::new("MSCU6639871").unwrap();
/// manifest
///     .load(FreightContainer::general(code.clone(), 10).unwrap())
///     .unwrap();
///
/// assert_eq!(manifest.which_stack(&code), Some(StackIndex::new(0)));
/// assert_eq!(manifest.total_weight(), 10);
///
/// let unloaded = manifest.unload(&code).unwrap();
/// assert_eq!(unloaded.code(), &code);
/// assert!(manifest.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Manifest<C>
where
    C: Cargo,
{
    config: ManifestConfig<C::Weight>,
    stacks: Vec<Stack<C>>,
    /// Summed gross weight of everything on board.
    total_weight: C::Weight,
    /// Identifier to stack for every container on board.
    locations: FxHashMap<C::Id, StackIndex>,
}

impl<C> Manifest<C>
where
    C: Cargo,
{
    /// Creates an empty manifest for a voyage.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if any parameter is negative or a
    /// count does not fit `usize`, and [`ConfigurationError::TooLarge`] if the
    /// stacks cannot be allocated.
    pub fn new<N>(
        num_stacks: N,
        max_height: N,
        max_weight: C::Weight,
    ) -> Result<Self, ConfigurationError>
    where
        N: PrimInt + Display,
    {
        let config = ManifestConfig::new(num_stacks, max_height, max_weight)?;
        Self::from_config(config)
    }

    /// Creates an empty manifest from already validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooLarge`] for `num_stacks` if the row of
    /// stacks cannot be allocated.
    pub fn from_config(config: ManifestConfig<C::Weight>) -> Result<Self, ConfigurationError> {
        let mut stacks = Vec::new();
        stacks
            .try_reserve_exact(config.num_stacks())
            .map_err(|_| ConfigurationError::TooLarge {
                parameter: "num_stacks",
                value: config.num_stacks().to_string(),
            })?;
        stacks.extend((0..config.num_stacks()).map(|_| Stack::new(config.max_height())));

        debug!("created manifest: {}", config);

        Ok(Self {
            config,
            stacks,
            total_weight: num_traits::zero(),
            locations: FxHashMap::default(),
        })
    }

    /// Returns the capacity parameters of this voyage.
    #[inline]
    pub fn config(&self) -> &ManifestConfig<C::Weight> {
        &self.config
    }

    /// Returns the number of stacks on deck.
    #[inline]
    pub fn num_stacks(&self) -> usize {
        self.stacks.len()
    }

    /// Returns the maximum number of containers in any one stack.
    #[inline]
    pub fn max_height(&self) -> usize {
        self.config.max_height()
    }

    /// Returns the total weight ceiling.
    #[inline]
    pub fn max_weight(&self) -> C::Weight {
        self.config.max_weight()
    }

    /// Returns the summed gross weight of everything on board.
    #[inline]
    pub fn total_weight(&self) -> C::Weight {
        self.total_weight
    }

    /// Returns how much more weight may be loaded.
    #[inline]
    pub fn remaining_weight(&self) -> C::Weight {
        self.max_weight().saturating_sub(self.total_weight)
    }

    /// Returns the number of containers on board.
    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if nothing is on board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns all stacks in slot order.
    #[inline]
    pub fn stacks(&self) -> &[Stack<C>] {
        &self.stacks
    }

    /// Returns `true` if a container with identifier `id` is on board.
    #[inline]
    pub fn contains(&self, id: &C::Id) -> bool {
        self.locations.contains_key(id)
    }

    /// Decides where `item` would go without loading it.
    ///
    /// Runs exactly the checks [`Manifest::load`] runs, in the same order,
    /// and reports the same stack `load` would pick for the current state.
    ///
    /// # Errors
    ///
    /// See [`Manifest::load`].
    pub fn placement_for(&self, item: &C) -> Result<Location, LoadError<C::Weight>> {
        self.check_load(item).map(|(location, _)| location)
    }

    /// Loads a container onto the ship and returns where it was placed.
    ///
    /// # Errors
    ///
    /// Checked in this order, with nothing changed on failure:
    ///
    /// 1. [`LoadError::DuplicateIdentifier`] if a container with the same
    ///    identifier is already on board.
    /// 2. [`LoadError::WeightLimit`] if the new total would exceed the
    ///    weight ceiling.
    /// 3. [`LoadError::NoSpace`] if no stack is empty or topped by the same
    ///    category with room to spare.
    pub fn load(&mut self, item: C) -> Result<Location, LoadError<C::Weight>> {
        let (location, new_total) = self.check_load(&item)?;

        debug!(
            "loading {} ({:?}, {}) onto {}",
            item.id(),
            item.category(),
            item.gross_weight(),
            location
        );

        self.locations.insert(item.id().clone(), location.stack());
        self.stacks[location.stack().get()].push(item);
        self.total_weight = new_total;

        debug_assert!(self.invariants_hold());
        Ok(location)
    }

    /// Unloads the container with identifier `id`, handing it back to the caller.
    ///
    /// Only the top container of a stack can be reached by the crane.
    ///
    /// # Errors
    ///
    /// Returns [`UnloadError::InaccessibleOrAbsent`] if the container is not
    /// on board, or is not on top of its stack. Nothing is changed on failure.
    pub fn unload(&mut self, id: &C::Id) -> Result<C, UnloadError> {
        let Some(&stack_index) = self.locations.get(id) else {
            return Err(UnloadError::InaccessibleOrAbsent {
                id: id.to_string(),
                location: None,
            });
        };

        let stack = &mut self.stacks[stack_index.get()];
        if !stack.is_top(id) {
            return Err(UnloadError::InaccessibleOrAbsent {
                id: id.to_string(),
                location: stack
                    .tier_of(id)
                    .map(|tier| Location::new(stack_index, tier)),
            });
        }

        let Some(item) = stack.pop() else {
            return Err(UnloadError::InaccessibleOrAbsent {
                id: id.to_string(),
                location: None,
            });
        };

        self.locations.remove(id);
        self.total_weight = self.total_weight.saturating_sub(item.gross_weight());

        debug!(
            "unloaded {} ({}) from stack {}",
            id,
            item.gross_weight(),
            stack_index.get()
        );

        debug_assert!(self.invariants_hold());
        Ok(item)
    }

    /// Returns the stack holding the container with identifier `id`, or
    /// `None` if it is not on board.
    #[inline]
    pub fn which_stack(&self, id: &C::Id) -> Option<StackIndex> {
        self.locations.get(id).copied()
    }

    /// Returns the container's height in its stack, counting from zero at the
    /// bottom, or `None` if it is not on board.
    #[inline]
    pub fn height_of(&self, id: &C::Id) -> Option<TierIndex> {
        self.locate(id).map(|location| location.tier())
    }

    /// Returns the stack and tier of the container with identifier `id`.
    pub fn locate(&self, id: &C::Id) -> Option<Location> {
        let stack = self.which_stack(id)?;
        let tier = self.stacks[stack.get()].tier_of(id)?;
        Some(Location::new(stack, tier))
    }

    /// Returns a borrowed view of one stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackIndexError::InvalidStackIndex`] if `index` is not in
    /// `0..num_stacks()`.
    pub fn stack(&self, index: StackIndex) -> Result<&Stack<C>, StackIndexError> {
        let index = index.get();
        self.stacks
            .get(index)
            .ok_or(StackIndexError::InvalidStackIndex {
                index,
                num_stacks: self.stacks.len(),
            })
    }

    /// Returns a copy of one stack's containers, bottom first. An empty stack
    /// yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`StackIndexError::InvalidStackIndex`] if `index` is not in
    /// `0..num_stacks()`.
    pub fn snapshot(&self, index: StackIndex) -> Result<Vec<C>, StackIndexError>
    where
        C: Clone,
    {
        self.stack(index).map(|stack| stack.as_slice().to_vec())
    }

    /// Returns the identifiers of the containers the crane can currently
    /// reach, in slot order.
    pub fn accessible(&self) -> impl Iterator<Item = &C::Id> + '_ {
        self.stacks.iter().filter_map(|stack| stack.top()).map(Cargo::id)
    }

    /// Runs the load checks and returns the target location and the new total.
    fn check_load(&self, item: &C) -> Result<(Location, C::Weight), LoadError<C::Weight>> {
        if self.locations.contains_key(item.id()) {
            return Err(LoadError::DuplicateIdentifier {
                id: item.id().to_string(),
            });
        }

        let incoming = item.gross_weight();
        let new_total = self
            .total_weight
            .checked_add(&incoming)
            .filter(|total| *total <= self.max_weight())
            .ok_or_else(|| LoadError::WeightLimit {
                id: item.id().to_string(),
                current: self.total_weight,
                incoming,
                max_weight: self.max_weight(),
            })?;

        let stack = self
            .first_fit(item.category())
            .ok_or_else(|| LoadError::NoSpace {
                id: item.id().to_string(),
            })?;

        let tier = TierIndex::new(self.stacks[stack.get()].len());
        Ok((Location::new(stack, tier), new_total))
    }

    /// Returns the lowest-indexed stack that accepts `category`.
    fn first_fit(&self, category: C::Category) -> Option<StackIndex> {
        self.stacks
            .iter()
            .enumerate()
            .find(|(index, stack)| {
                let accepts = stack.accepts(category);
                trace!(
                    "placement scan for {:?}: stack {} {:?} -> {}",
                    category,
                    index,
                    stack.occupancy(),
                    accepts
                );
                accepts
            })
            .map(|(index, _)| StackIndex::new(index))
    }

    /// Recomputes the summed gross weight from the stacks, or `None` on overflow.
    fn recompute_total_weight(&self) -> Option<C::Weight> {
        self.stacks.iter().try_fold(num_traits::zero(), |acc: C::Weight, stack| {
            acc.checked_add(&stack.total_weight()?)
        })
    }

    /// Checks every manifest invariant against the stored stacks.
    fn invariants_hold(&self) -> bool {
        let weight_ok = self.recompute_total_weight() == Some(self.total_weight)
            && self.total_weight <= self.max_weight();

        let stacks_ok = self.stacks.iter().all(|stack| {
            stack.len() <= self.max_height()
                && stack
                    .category()
                    .is_none_or(|category| stack.iter().all(|item| item.category() == category))
        });

        let resident: usize = self.stacks.iter().map(Stack::len).sum();
        let index_ok = resident == self.locations.len()
            && self.stacks.iter().enumerate().all(|(index, stack)| {
                stack
                    .iter()
                    .all(|item| self.which_stack(item.id()) == Some(StackIndex::new(index)))
            });

        weight_ok && stacks_ok && index_ok
    }
}
