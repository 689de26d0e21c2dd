//! Category Bar Component
//!
//! Category buttons above the clothes list. "All" clears the selection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api;
use crate::context::AppContext;
use crate::models::Category;

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let selected = ctx.selected_category;
    let (categories, set_categories) = signal(Vec::<Category>::new());

    // Load categories on mount
    Effect::new(move |_| {
        let config = ctx.api_config();
        spawn_local(async move {
            match api::list_categories(&config).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[CategoryBar] Loaded {} categories", loaded.len()).into());
                    set_categories.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CategoryBar] Error loading categories: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="category-bar">
            <button
                class=move || if selected.get().is_none() { "category-btn active" } else { "category-btn" }
                on:click=move |_| ctx.select_category(None)
            >
                "All"
            </button>
            <For
                each=move || categories.get()
                key=|category| category.id.clone()
                children=move |category| {
                    let id = category.id.clone();
                    let id_for_click = id.clone();
                    let is_active = move || selected.get().as_deref() == Some(id.as_str());

                    view! {
                        <button
                            class=move || if is_active() { "category-btn active" } else { "category-btn" }
                            on:click=move |_| ctx.select_category(Some(id_for_click.clone()))
                        >
                            {category.name.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
