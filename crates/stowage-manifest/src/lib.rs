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

//! # Stowage Manifest
//!
//! **The loading engine of a container ship's cargo manifest.**
//!
//! Containers are stowed into a fixed row of deck stacks subject to a total
//! weight ceiling, a per-stack height cap, unique container identifiers, and
//! single-category stacks. Placement is a deterministic first-fit scan from
//! the stack nearest the bridge; unloading is restricted to the top of a stack.
//!
//! ## Modules
//!
//! * **`config`**: `ManifestConfig`, the validated capacity parameters of a voyage.
//! * **`stack`**: `Stack`, a homogeneous, height-capped LIFO column, and its `Occupancy` summary.
//! * **`manifest`**: `Manifest`, the aggregate that loads, unloads, and locates containers.
//! * **`render`**: Plain-text rendering of the deck for front-ends, with optional highlighting.
//! * **`error`**: Closed error kinds per operation, plus the umbrella `ManifestError`.
//!
//! ## Guarantees
//!
//! Every operation either fully succeeds or returns an error and leaves the
//! manifest exactly as it was. The engine is synchronous and single-threaded;
//! callers sharing a manifest across threads wrap the whole value in one lock.

pub mod config;
pub mod error;
pub mod manifest;
pub mod render;
pub mod stack;
