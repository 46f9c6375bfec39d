//! Sort View
//!
//! Display orderings derived from the list store. Never mutates the source.

use pinyin::ToPinyin;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::{DomainError, Item};

/// How the packing list is ordered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Insertion order
    Input,
    /// Alphabetical by description
    Description,
    /// Unpacked first
    #[default]
    Packed,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Input, SortBy::Description, SortBy::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }

    /// Text for the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Input => "Sort by input order",
            SortBy::Description => "Sort by description",
            SortBy::Packed => "Sort by packed status",
        }
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(SortBy::Input),
            "description" => Ok(SortBy::Description),
            "packed" => Ok(SortBy::Packed),
            other => Err(DomainError::Validation(format!("unknown sort mode '{}'", other))),
        }
    }
}

/// Items ordered for display. Ties keep insertion order.
pub fn sorted(items: &[Item], mode: SortBy) -> Vec<Item> {
    let mut out = items.to_vec();
    match mode {
        SortBy::Input => {}
        SortBy::Description => {
            out.sort_by(|a, b| compare_text(&a.description, &b.description));
        }
        SortBy::Packed => out.sort_by_key(|item| item.packed),
    }
    out
}

/// Case-insensitive comparison with Chinese characters ordered by pinyin.
/// Equal keys compare equal so the stable sort keeps insertion order.
fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.chars() {
        match c.to_pinyin() {
            Some(p) => key.push_str(p.plain()),
            None => key.extend(c.to_lowercase()),
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, Quantity};

    fn make_item(id: u64, description: &str, packed: bool) -> Item {
        Item {
            id: ItemId(id),
            description: description.to_string(),
            quantity: Quantity::default(),
            packed,
        }
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn test_default_is_packed() {
        assert_eq!(SortBy::default(), SortBy::Packed);
    }

    #[test]
    fn test_parse_modes() {
        for mode in SortBy::ALL {
            assert_eq!(mode.as_str().parse::<SortBy>().unwrap(), mode);
        }
        assert!("size".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_input_is_identity() {
        let items = vec![make_item(3, "c", true), make_item(1, "a", false), make_item(2, "b", false)];
        assert_eq!(sorted(&items, SortBy::Input), items);
    }

    #[test]
    fn test_description_ignores_case() {
        let items = vec![
            make_item(1, "cherry", false),
            make_item(2, "Banana", false),
            make_item(3, "apple", false),
        ];
        assert_eq!(ids(&sorted(&items, SortBy::Description)), vec![3, 2, 1]);
    }

    #[test]
    fn test_description_ties_keep_input_order() {
        let items = vec![
            make_item(1, "socks", false),
            make_item(2, "hat", false),
            make_item(3, "socks", true),
        ];
        assert_eq!(ids(&sorted(&items, SortBy::Description)), vec![2, 1, 3]);
    }

    #[test]
    fn test_description_case_only_ties_keep_input_order() {
        let items = vec![
            make_item(1, "socks", false),
            make_item(2, "Socks", false),
            make_item(3, "hat", false),
            make_item(4, "HAT", false),
        ];
        assert_eq!(ids(&sorted(&items, SortBy::Description)), vec![3, 4, 1, 2]);

        let reversed = vec![make_item(2, "Socks", false), make_item(1, "socks", false)];
        assert_eq!(ids(&sorted(&reversed, SortBy::Description)), vec![2, 1]);
    }

    #[test]
    fn test_description_orders_chinese_by_pinyin() {
        // 牙刷 (yashua), 毛巾 (maojin), apple
        let items = vec![
            make_item(1, "牙刷", false),
            make_item(2, "毛巾", false),
            make_item(3, "apple", false),
        ];
        assert_eq!(ids(&sorted(&items, SortBy::Description)), vec![3, 2, 1]);
    }

    #[test]
    fn test_packed_is_stable_partition() {
        let items = vec![
            make_item(1, "a", true),
            make_item(2, "b", false),
            make_item(3, "c", true),
            make_item(4, "d", false),
        ];
        assert_eq!(ids(&sorted(&items, SortBy::Packed)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sorting_leaves_source_untouched() {
        let items = vec![make_item(1, "b", true), make_item(2, "a", false)];
        let copy = items.clone();
        let _ = sorted(&items, SortBy::Description);
        let _ = sorted(&items, SortBy::Packed);
        assert_eq!(items, copy);
    }
}
