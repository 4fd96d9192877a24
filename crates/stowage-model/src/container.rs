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

//! Freight containers and their goods.
//!
//! A `FreightContainer` is an immutable record of a container code, a gross
//! weight in tonnes, and the goods it carries. The goods decide the container's
//! `Category`, which is all the manifest looks at when it keeps stacks
//! homogeneous. Variant data such as a reefer's set-point temperature or a
//! dangerous-goods class travels with the container but is never interpreted
//! by the manifest.

use crate::{cargo::Cargo, code::ContainerCode};
use thiserror::Error;

/// Gross weights are measured in whole tonnes.
pub type Tonnes = u32;

/// The tare weight of a standard 20 ft container, and therefore the lowest
/// admissible gross weight.
pub const MIN_GROSS_WEIGHT: Tonnes = 4;

/// The highest admissible gross weight of a standard 20 ft container.
pub const MAX_GROSS_WEIGHT: Tonnes = 30;

/// The reasons a container is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("gross weight of {0} tonnes is outside the admissible range of 4 to 30 tonnes")]
    GrossWeightOutOfRange(Tonnes),
    #[error("dangerous goods class {0} is not within 1 to 9")]
    InvalidHazardClass(u8),
}

/// The category of a container. Stacks only ever hold a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    General,
    Refrigerated,
    Dangerous,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 3] = [
        Category::General,
        Category::Refrigerated,
        Category::Dangerous,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::General => "General",
            Category::Refrigerated => "Refrigerated",
            Category::Dangerous => "Dangerous",
        };
        f.write_str(name)
    }
}

/// A UN dangerous goods class, `1` (explosives) through `9` (miscellaneous).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct HazardClass(u8);

impl HazardClass {
    /// Validates and wraps a dangerous goods class.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidHazardClass`] if `class` is not in `1..=9`.
    pub fn new(class: u8) -> Result<Self, ContainerError> {
        match class {
            1..=9 => Ok(Self(class)),
            _ => Err(ContainerError::InvalidHazardClass(class)),
        }
    }

    /// Returns the numeric class.
    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HazardClass {
    type Error = ContainerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HazardClass> for u8 {
    fn from(class: HazardClass) -> Self {
        class.0
    }
}

impl std::fmt::Display for HazardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The goods a container carries, with the data that only matters for that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goods {
    General,
    /// Refrigerated goods kept at `temperature` degrees Celsius.
    Refrigerated { temperature: i32 },
    Dangerous { class: HazardClass },
}

impl Goods {
    /// Returns the category tag of these goods.
    #[inline]
    pub fn category(&self) -> Category {
        match self {
            Goods::General => Category::General,
            Goods::Refrigerated { .. } => Category::Refrigerated,
            Goods::Dangerous { .. } => Category::Dangerous,
        }
    }
}

/// A freight container ready to be offered to a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreightContainer {
    code: ContainerCode,
    gross_weight: Tonnes,
    goods: Goods,
}

impl FreightContainer {
    /// Creates a container carrying `goods`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::GrossWeightOutOfRange`] if `gross_weight` is not
    /// within [`MIN_GROSS_WEIGHT`]..=[`MAX_GROSS_WEIGHT`].
    pub fn new(
        code: ContainerCode,
        gross_weight: Tonnes,
        goods: Goods,
    ) -> Result<Self, ContainerError> {
        if !(MIN_GROSS_WEIGHT..=MAX_GROSS_WEIGHT).contains(&gross_weight) {
            return Err(ContainerError::GrossWeightOutOfRange(gross_weight));
        }

        Ok(Self {
            code,
            gross_weight,
            goods,
        })
    }

    /// Creates a general goods container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stowage_model::container::{Category, FreightContainer};
    ///
    /// let code = "MSCU6639871".parse().unwrap();
    /// let container = FreightContainer::general(code, 10).unwrap();
    /// assert_eq!(container.goods().category(), Category::General);
    /// ```
    #[inline]
    pub fn general(code: ContainerCode, gross_weight: Tonnes) -> Result<Self, ContainerError> {
        Self::new(code, gross_weight, Goods::General)
    }

    /// Creates a refrigerated container kept at `temperature` degrees Celsius.
    #[inline]
    pub fn refrigerated(
        code: ContainerCode,
        gross_weight: Tonnes,
        temperature: i32,
    ) -> Result<Self, ContainerError> {
        Self::new(code, gross_weight, Goods::Refrigerated { temperature })
    }

    /// Creates a dangerous goods container of the given UN class.
    ///
    /// # Errors
    ///
    /// Fails if the weight is out of range or `class` is not in `1..=9`.
    /// The weight is checked first.
    pub fn dangerous(
        code: ContainerCode,
        gross_weight: Tonnes,
        class: u8,
    ) -> Result<Self, ContainerError> {
        if !(MIN_GROSS_WEIGHT..=MAX_GROSS_WEIGHT).contains(&gross_weight) {
            return Err(ContainerError::GrossWeightOutOfRange(gross_weight));
        }
        let class = HazardClass::new(class)?;
        Self::new(code, gross_weight, Goods::Dangerous { class })
    }

    /// Returns the container code.
    #[inline]
    pub fn code(&self) -> &ContainerCode {
        &self.code
    }

    /// Returns the goods carried.
    #[inline]
    pub fn goods(&self) -> &Goods {
        &self.goods
    }

    /// Returns the reefer set-point, if this is a refrigerated container.
    #[inline]
    pub fn temperature(&self) -> Option<i32> {
        match self.goods {
            Goods::Refrigerated { temperature } => Some(temperature),
            _ => None,
        }
    }

    /// Returns the dangerous goods class, if this is a dangerous goods container.
    #[inline]
    pub fn hazard_class(&self) -> Option<HazardClass> {
        match self.goods {
            Goods::Dangerous { class } => Some(class),
            _ => None,
        }
    }
}

impl Cargo for FreightContainer {
    type Id = ContainerCode;
    type Category = Category;
    type Weight = Tonnes;

    #[inline]
    fn id(&self) -> &ContainerCode {
        &self.code
    }

    #[inline]
    fn category(&self) -> Category {
        self.goods.category()
    }

    #[inline]
    fn gross_weight(&self) -> Tonnes {
        self.gross_weight
    }
}

impl std::fmt::Display for FreightContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.goods {
            Goods::General => write!(f, "{} General {}t", self.code, self.gross_weight),
            Goods::Refrigerated { temperature } => write!(
                f,
                "{} Refrigerated {}t @ {}°C",
                self.code, self.gross_weight, temperature
            ),
            Goods::Dangerous { class } => write!(
                f,
                "{} Dangerous {}t class {}",
                self.code, self.gross_weight, class
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> ContainerCode {
        "MSCU6639871".parse().unwrap()
    }

    #[test]
    fn test_general_container_accessors() {
        let c = FreightContainer::general(code(), 10).unwrap();
        assert_eq!(c.code(), &code());
        assert_eq!(c.gross_weight(), 10);
        assert_eq!(c.category(), Category::General);
        assert_eq!(c.temperature(), None);
        assert_eq!(c.hazard_class(), None);
    }

    #[test]
    fn test_refrigerated_container_keeps_temperature() {
        let c = FreightContainer::refrigerated(code(), 20, -18).unwrap();
        assert_eq!(c.category(), Category::Refrigerated);
        assert_eq!(c.temperature(), Some(-18));
        assert_eq!(c.goods(), &Goods::Refrigerated { temperature: -18 });
    }

    #[test]
    fn test_dangerous_container_keeps_class() {
        let c = FreightContainer::dangerous(code(), 10, 3).unwrap();
        assert_eq!(c.category(), Category::Dangerous);
        assert_eq!(c.hazard_class().map(|h| h.get()), Some(3));
    }

    #[test]
    fn test_weight_bounds_are_inclusive() {
        assert!(FreightContainer::general(code(), MIN_GROSS_WEIGHT).is_ok());
        assert!(FreightContainer::general(code(), MAX_GROSS_WEIGHT).is_ok());
        for bad in [0, 3, 31, 1000] {
            assert_eq!(
                FreightContainer::general(code(), bad),
                Err(ContainerError::GrossWeightOutOfRange(bad))
            );
            assert!(FreightContainer::refrigerated(code(), bad, 3).is_err());
            assert!(FreightContainer::dangerous(code(), bad, 3).is_err());
        }
    }

    #[test]
    fn test_hazard_class_bounds() {
        assert!(HazardClass::new(1).is_ok());
        assert!(HazardClass::new(9).is_ok());
        assert_eq!(HazardClass::new(0), Err(ContainerError::InvalidHazardClass(0)));
        assert_eq!(
            FreightContainer::dangerous(code(), 10, 10),
            Err(ContainerError::InvalidHazardClass(10))
        );
    }

    #[test]
    fn test_weight_is_checked_before_hazard_class() {
        assert_eq!(
            FreightContainer::dangerous(code(), 31, 10),
            Err(ContainerError::GrossWeightOutOfRange(31))
        );
    }

    #[test]
    fn test_category_comes_from_goods_only() {
        let a = FreightContainer::refrigerated(code(), 10, 3).unwrap();
        let b = FreightContainer::refrigerated(code(), 12, 10).unwrap();
        assert_eq!(a.category(), b.category());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_formatting() {
        let g = FreightContainer::general(code(), 10).unwrap();
        assert_eq!(g.to_string(), "MSCU6639871 General 10t");
        let r = FreightContainer::refrigerated(code(), 12, -5).unwrap();
        assert_eq!(r.to_string(), "MSCU6639871 Refrigerated 12t @ -5°C");
        let d = FreightContainer::dangerous(code(), 14, 9).unwrap();
        assert_eq!(d.to_string(), "MSCU6639871 Dangerous 14t class 9");
        assert_eq!(Category::Refrigerated.to_string(), "Refrigerated");
    }
}
