//! Cloth Card Component
//!
//! A single clothing entry in the list.

use leptos::prelude::*;
use crate::models::{format_number, ClothItem};

/// Text shown on a card, one field per rendered line
#[derive(Debug, Clone, PartialEq)]
pub struct CardText {
    pub title: String,
    pub description: String,
    pub size_material: String,
    pub rating: String,
    pub price: String,
}

impl CardText {
    pub fn from_item(item: &ClothItem) -> Self {
        Self {
            title: format!("{}({})", item.name, item.color),
            description: item.description.clone(),
            size_material: format!("{} - {}", item.size, item.material),
            rating: format_number(item.rating),
            price: format_number(item.price),
        }
    }
}

#[component]
pub fn ClothCard(item: ClothItem) -> impl IntoView {
    let text = CardText::from_item(&item);

    view! {
        <div class="cloth-wrapper">
            <p class="cloth-name">{text.title}</p>
            <p><i>{text.description}</i></p>
            <p>{text.size_material}</p>
            <div class="data-row">
                <p>{text.rating}</p>
                <p>{text.price}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_text() {
        let item = ClothItem {
            name: "Shirt".to_string(),
            color: "Blue".to_string(),
            description: "Casual".to_string(),
            size: "M".to_string(),
            material: "Cotton".to_string(),
            rating: Some(4.0),
            price: Some(20.0),
            ..Default::default()
        };

        let text = CardText::from_item(&item);
        assert_eq!(text.title, "Shirt(Blue)");
        assert_eq!(text.description, "Casual");
        assert_eq!(text.size_material, "M - Cotton");
        assert_eq!(text.rating, "4");
        assert_eq!(text.price, "20");
    }

    #[test]
    fn test_card_text_fractional_values() {
        let item = ClothItem {
            name: "T-Shirt".to_string(),
            color: "Red".to_string(),
            rating: Some(4.5),
            price: Some(19.99),
            ..Default::default()
        };

        let text = CardText::from_item(&item);
        assert_eq!(text.title, "T-Shirt(Red)");
        assert_eq!(text.size_material, " - ");
        assert_eq!(text.rating, "4.5");
        assert_eq!(text.price, "19.99");
    }
}
