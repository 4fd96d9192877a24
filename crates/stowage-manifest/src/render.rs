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

//! Plain-text rendering of a manifest for front-ends.
//!
//! One line per stack in slot order, containers bottom to top. Each container
//! renders as `| CODE |`, or `|*CODE*|` when highlighted. A line opens with
//! `|` and closes with `|`, so an empty stack reads `||  ||`.
//!
//! ```text
//! || MSCU6639871 ||*ABCU1234564*||
//! ||  ||
//! ```

use crate::manifest::Manifest;
use stowage_model::cargo::Cargo;

/// A `Display` adaptor returned by [`Manifest::display`].
pub struct ManifestDisplay<'a, C>
where
    C: Cargo,
{
    manifest: &'a Manifest<C>,
    highlight: Option<&'a C::Id>,
}

impl<C> Manifest<C>
where
    C: Cargo,
{
    /// Returns a renderer for this manifest, marking the container with
    /// identifier `highlight` if it is on board.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stowage_manifest::manifest::Manifest;
    /// use stowage_model::{code::ContainerCode, container::FreightContainer};
    ///
    /// let mut manifest = Manifest::new(2, 2, 50).unwrap();
    /// let code = ContainerCode::new("MSCU6639871").unwrap();
    /// manifest
    ///     .load(FreightContainer::general(code.clone(), 10).unwrap())
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     manifest.display(Some(&code)).to_string(),
    ///     "||*MSCU6639871*||\n||  ||\n"
    /// );
    /// ```
    #[inline]
    pub fn display<'a>(&'a self, highlight: Option<&'a C::Id>) -> ManifestDisplay<'a, C> {
        ManifestDisplay {
            manifest: self,
            highlight,
        }
    }
}

impl<C> std::fmt::Display for ManifestDisplay<'_, C>
where
    C: Cargo,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stack in self.manifest.stacks() {
            f.write_str("|")?;
            for item in stack {
                if self.highlight == Some(item.id()) {
                    write!(f, "|*{}*|", item.id())?;
                } else {
                    write!(f, "| {} |", item.id())?;
                }
            }
            if stack.is_empty() {
                f.write_str("|  ||\n")?;
            } else {
                f.write_str("|\n")?;
            }
        }
        Ok(())
    }
}

impl<C> std::fmt::Display for Manifest<C>
where
    C: Cargo,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.display(None), f)
    }
}
