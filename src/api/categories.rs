//! Category Endpoints

use crate::config::ApiConfig;
use crate::models::Category;
use super::http::get_text;

pub fn categories_url(config: &ApiConfig) -> String {
    config.endpoint("/api/categories")
}

pub fn parse_categories(body: &str) -> Result<Vec<Category>, String> {
    let value: Option<Vec<Category>> =
        serde_json::from_str(body).map_err(|e| format!("Invalid categories response: {}", e))?;
    Ok(value.unwrap_or_default())
}

pub async fn list_categories(config: &ApiConfig) -> Result<Vec<Category>, String> {
    let body = get_text(&categories_url(config)).await?;
    parse_categories(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        let body = r#"[{"id": "1234", "name": "Men"}, {"id": "5678", "name": "Women"}]"#;
        let categories = parse_categories(body).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Men");
        assert_eq!(categories[1].id, "5678");
    }

    #[test]
    fn test_parse_null_categories() {
        assert!(parse_categories("null").unwrap().is_empty());
    }

    #[test]
    fn test_categories_url() {
        let config = ApiConfig::new("http://localhost:5000");
        assert_eq!(categories_url(&config), "http://localhost:5000/api/categories");
    }
}
