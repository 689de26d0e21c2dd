//! Clothes Endpoints
//!
//! Query building and response parsing for `GET /api/clothes`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::models::ClothItem;
use super::http::get_text;

/// Everything outside the RFC 3986 unreserved set
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// ========================
// Query
// ========================

/// Filters understood by the clothes endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClothesQuery {
    pub category_id: Option<String>,
    pub size: Option<String>,
    pub available_only: bool,
}

impl ClothesQuery {
    pub fn for_category(category_id: Option<String>) -> Self {
        Self {
            category_id,
            ..Default::default()
        }
    }

    fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(id) = self.category_id.as_deref().filter(|id| !id.is_empty()) {
            params.push(("category_id", id));
        }
        if let Some(size) = self.size.as_deref().filter(|s| !s.is_empty()) {
            params.push(("size", size));
        }
        if self.available_only {
            params.push(("is_available", "true"));
        }
        params
    }

    pub fn to_url(&self, config: &ApiConfig) -> String {
        let mut url = config.endpoint("/api/clothes");
        for (i, (key, value)) in self.params().into_iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.extend(utf8_percent_encode(value, QUERY_VALUE));
        }
        url
    }
}

// ========================
// Response
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum ClothesPayload {
    List(Vec<ClothItem>),
    Envelope { clothes: Vec<ClothItem> },
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Parse a clothes response body.
///
/// Falsy JSON (`null`, `false`, `0`, `""`) means no items. Both a bare array
/// and the server's `{"clothes": [...]}` envelope are accepted.
pub fn parse_clothes(body: &str) -> Result<Vec<ClothItem>, String> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("Invalid clothes response: {}", e))?;
    if is_falsy(&value) {
        return Ok(Vec::new());
    }

    match serde_json::from_value(value) {
        Ok(ClothesPayload::List(items)) => Ok(items),
        Ok(ClothesPayload::Envelope { clothes }) => Ok(clothes),
        Err(_) => Err("Unexpected clothes response shape".to_string()),
    }
}

// ========================
// Commands
// ========================

pub async fn list_clothes(config: &ApiConfig, query: &ClothesQuery) -> Result<Vec<ClothItem>, String> {
    let body = get_text(&query.to_url(config)).await?;
    parse_clothes(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://138.68.76.97")
    }

    #[test]
    fn test_url_without_category() {
        let url = ClothesQuery::for_category(None).to_url(&config());
        assert_eq!(url, "http://138.68.76.97/api/clothes");
    }

    #[test]
    fn test_url_with_category() {
        let url = ClothesQuery::for_category(Some("5".to_string())).to_url(&config());
        assert_eq!(url, "http://138.68.76.97/api/clothes?category_id=5");
    }

    #[test]
    fn test_url_empty_category_is_no_filter() {
        let url = ClothesQuery::for_category(Some(String::new())).to_url(&config());
        assert_eq!(url, "http://138.68.76.97/api/clothes");
    }

    #[test]
    fn test_url_all_filters_encoded() {
        let query = ClothesQuery {
            category_id: Some("0b6f3c1e-8f3a-4d38".to_string()),
            size: Some("X L&".to_string()),
            available_only: true,
        };
        assert_eq!(
            query.to_url(&config()),
            "http://138.68.76.97/api/clothes?category_id=0b6f3c1e-8f3a-4d38&size=X%20L%26&is_available=true"
        );
    }

    #[test]
    fn test_parse_array() {
        let body = r#"[{"name":"Shirt","color":"Blue","description":"Casual","size":"M","material":"Cotton","rating":4,"price":20}]"#;
        let items = parse_clothes(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Shirt");
        assert_eq!(items[0].price, Some(20.0));
    }

    #[test]
    fn test_parse_envelope() {
        let body = r#"{"clothes": [{"name":"Jeans","color":"Blue"}, {"name":"Hat"}]}"#;
        let items = parse_clothes(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Hat");
    }

    #[test]
    fn test_parse_falsy_is_empty() {
        for body in ["null", "false", "0", "\"\"", "[]"] {
            assert!(parse_clothes(body).unwrap().is_empty(), "body: {}", body);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_clothes("<html>").is_err());
        assert!(parse_clothes(r#"{"error": "Invalid category_id UUID"}"#).is_err());
        assert!(parse_clothes("42").is_err());
    }
}
