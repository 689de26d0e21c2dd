//! Frontend Models
//!
//! Data structures matching the clothes API entities.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Clothing item (matches backend `/api/clothes` rows)
///
/// The server owns the schema and nothing here validates it: missing or
/// null fields fall back to empty values, numbers may arrive as strings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ClothItem {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub size: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub material: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stock: Option<f64>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category_id: Option<String>,
}

/// Category (matches backend `/api/categories` rows)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Format a number the way a browser prints it: `4` rather than `4.0`,
/// exponent form below `1e-6` and from `1e21` up.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v == 0.0 => "0".to_string(),
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) if v.is_infinite() => {
            if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
        }
        Some(v) if v.abs() >= 1e21 || v.abs() < 1e-6 => {
            let exp = format!("{:e}", v);
            if exp.contains("e-") { exp } else { exp.replacen('e', "e+", 1) }
        }
        Some(v) => format!("{}", v),
    }
}
