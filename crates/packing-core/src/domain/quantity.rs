//! Item quantity, restricted to what the add form offers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of units of an item, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Returns `None` when `value` is outside `MIN..=MAX`
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every selectable quantity in ascending order
    pub fn all() -> impl Iterator<Item = Quantity> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Quantity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!("quantity {} outside {}..={}", value, Self::MIN, Self::MAX)
        })
    }
}

impl From<Quantity> for u8 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::new(1).map(Quantity::get), Some(1));
        assert_eq!(Quantity::new(20).map(Quantity::get), Some(20));
        assert!(Quantity::new(21).is_none());
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(Quantity::default().get(), 1);
    }

    #[test]
    fn test_all_covers_range() {
        let all: Vec<u8> = Quantity::all().map(Quantity::get).collect();
        assert_eq!(all.len(), 20);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&20));
    }
}
