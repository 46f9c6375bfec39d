//! UI Components
//!
//! Leptos components for the packing list.

mod add_item_form;
mod clear_list_button;
mod item_row;
mod logo;
mod packing_list;
mod sort_selector;
mod stats_footer;
mod toast;

pub use add_item_form::AddItemForm;
pub use clear_list_button::ClearListButton;
pub use item_row::ItemRow;
pub use logo::Logo;
pub use packing_list::PackingList;
pub use sort_selector::SortSelector;
pub use stats_footer::StatsFooter;
pub use toast::Toast;
