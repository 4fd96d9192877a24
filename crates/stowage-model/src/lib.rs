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

//! # Stowage Model
//!
//! **The entity layer of the Stowage container manifest engine.**
//!
//! This crate supplies the already-validated inputs the manifest engine
//! (`stowage_manifest`) consumes. Nothing in here knows about stacks or decks.
//!
//! ## Architecture
//!
//! * **`index`**: Strongly typed wrappers (`StackIndex`, `TierIndex`) so deck slots and
//!   stack positions cannot be mixed up.
//! * **`cargo`**: The `Cargo` trait, the seam between item constructors and the engine.
//! * **`code`**: `ContainerCode`, an eleven-character owner/serial/check-digit identifier.
//! * **`container`**: `FreightContainer` and its `Goods` (general, refrigerated, dangerous),
//!   the stock `Cargo` implementation.
//!
//! ## Design Philosophy
//!
//! 1.  **Validate once**: Codes and containers are checked when they are built. The engine
//!     trusts what it is handed.
//! 2.  **Closed variants**: Container kinds are an enum carrying only the fields that kind
//!     needs, so the engine dispatches on a `Copy` tag instead of on types.

pub mod cargo;
pub mod code;
pub mod container;
pub mod index;
