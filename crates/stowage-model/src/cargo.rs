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

//! The boundary between item constructors and the manifest engine.
//!
//! The engine only ever needs three things from a piece of cargo: who it is,
//! what kind of stack it may join, and how much it weighs. Everything else an
//! item carries (temperatures, hazard classes, ...) is opaque to the engine.

use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A validated piece of cargo that can be stowed in a manifest.
///
/// Implementors guarantee that the identifier was validated and that the
/// gross weight is positive and within whatever bounds apply to the item.
/// The manifest trusts these values and never checks them again.
pub trait Cargo {
    /// The unique identifier of the item.
    type Id: Eq + Hash + Clone + Display + Debug;

    /// The category tag that drives stack homogeneity.
    type Category: Eq + Copy + Debug;

    /// The numeric type used for gross weights.
    type Weight: PrimInt + Display + Debug;

    /// Returns the identifier of the item.
    fn id(&self) -> &Self::Id;

    /// Returns the category of the item.
    fn category(&self) -> Self::Category;

    /// Returns the gross weight of the item.
    fn gross_weight(&self) -> Self::Weight;
}
