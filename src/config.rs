//! API Configuration
//!
//! Base URL of the clothes API, fixed at build time.

/// Host used when `CLOTHES_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://138.68.76.97";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read `CLOTHES_API_BASE_URL` from the build environment
    pub fn from_env() -> Self {
        match option_env!("CLOTHES_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/clothes`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.endpoint("/api/clothes"), "http://localhost:5000/api/clothes");
        assert_eq!(config.endpoint("api/categories"), "http://localhost:5000/api/categories");
    }
}
