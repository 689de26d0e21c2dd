//! Size Filter Component
//!
//! Size buttons and an availability toggle for the clothes query.

use leptos::prelude::*;

/// Size options offered by the filter
pub const SIZES: &[&str] = &["S", "M", "L", "XL"];

fn size_class(current: Option<&str>, option: Option<&str>) -> &'static str {
    if current == option { "size-btn active" } else { "size-btn" }
}

#[component]
pub fn SizeFilter(
    size: ReadSignal<Option<String>>,
    set_size: WriteSignal<Option<String>>,
    available_only: ReadSignal<bool>,
    set_available_only: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="size-filter">
            <button
                class=move || size_class(size.get().as_deref(), None)
                on:click=move |_| set_size.set(None)
            >
                "Any"
            </button>
            {SIZES.iter().map(|option| {
                let option = *option;
                view! {
                    <button
                        class=move || size_class(size.get().as_deref(), Some(option))
                        on:click=move |_| set_size.set(Some(option.to_string()))
                    >
                        {option}
                    </button>
                }
            }).collect_view()}
            <label class="available-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || available_only.get()
                    on:change=move |ev| set_available_only.set(event_target_checked(&ev))
                />
                "Available only"
            </label>
        </div>
    }
}
