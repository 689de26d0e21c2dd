//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// API endpoint configuration
    pub api: StoredValue<ApiConfig>,
    /// Selected category ID (None = all) - read
    pub selected_category: ReadSignal<Option<String>>,
    /// Selected category ID (None = all) - write
    set_selected_category: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        api: ApiConfig,
        selected_category: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            api: StoredValue::new(api),
            selected_category: selected_category.0,
            set_selected_category: selected_category.1,
        }
    }

    /// Select a category; empty IDs clear the selection
    pub fn select_category(&self, category_id: Option<String>) {
        self.set_selected_category
            .set(category_id.filter(|id| !id.is_empty()));
    }

    pub fn api_config(&self) -> ApiConfig {
        self.api.get_value()
    }
}

/// API configuration from context, or the build-time default when the
/// component is mounted outside `App`
pub fn use_api_config() -> ApiConfig {
    use_context::<AppContext>()
        .map(|ctx| ctx.api_config())
        .unwrap_or_default()
}
