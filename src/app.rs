//! Clothes Frontend App
//!
//! Category bar and size filter on top, the clothes list below.

use leptos::prelude::*;

use crate::components::{CategoryBar, Clothes, SizeFilter};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (selected_category, set_selected_category) = signal::<Option<String>>(None);
    let (size, set_size) = signal::<Option<String>>(None);
    let (available_only, set_available_only) = signal(false);

    let api = ApiConfig::from_env();
    web_sys::console::log_1(&format!("[APP] Using API at {}", api.base_url()).into());

    // Provide context to all children
    provide_context(AppContext::new(api, (selected_category, set_selected_category)));

    view! {
        <div class="app-layout">
            <h1>"Clothes"</h1>

            <CategoryBar />

            <SizeFilter
                size=size
                set_size=set_size
                available_only=available_only
                set_available_only=set_available_only
            />

            <Clothes
                selected_category=selected_category
                size=size
                available_only=Signal::derive(move || Some(available_only.get()))
            />
        </div>
    }
}
