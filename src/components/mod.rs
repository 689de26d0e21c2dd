//! UI Components
//!
//! Leptos components for browsing the clothes catalogue.

mod cloth_card;
mod clothes;
mod category_bar;
mod size_filter;

pub use cloth_card::ClothCard;
pub use clothes::Clothes;
pub use category_bar::CategoryBar;
pub use size_filter::SizeFilter;
