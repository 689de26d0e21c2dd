//! Clothes Component
//!
//! Fetches the clothes list for the current filters and renders one card
//! per item. The list is replaced wholesale on every accepted response.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ClothesQuery};
use crate::context::use_api_config;
use crate::models::ClothItem;
use crate::sequence::{RequestSequence, Ticket};
use super::ClothCard;

/// What to do with a completed fetch
#[derive(Debug, PartialEq)]
enum Outcome {
    Replace(Vec<ClothItem>),
    Stale,
    Failed(String),
}

fn resolve(sequence: &RequestSequence, ticket: Ticket, result: Result<Vec<ClothItem>, String>) -> Outcome {
    if !sequence.is_current(ticket) {
        return Outcome::Stale;
    }
    match result {
        Ok(items) => Outcome::Replace(items),
        Err(e) => Outcome::Failed(e),
    }
}

/// Take a ticket now and run `fetch` once for `query`.
///
/// The ticket is taken before the returned future is polled, so requests
/// are ordered by when the filters changed.
fn fetch_once<F, Fut>(sequence: &RequestSequence, query: ClothesQuery, fetch: F) -> (Ticket, impl Future<Output = Outcome>)
where
    F: FnOnce(ClothesQuery) -> Fut,
    Fut: Future<Output = Result<Vec<ClothItem>, String>>,
{
    let ticket = sequence.begin();
    let sequence = sequence.clone();
    let outcome = async move {
        let result = fetch(query).await;
        resolve(&sequence, ticket, result)
    };
    (ticket, outcome)
}

/// The displayed list and the request that produced it
#[derive(Debug, Clone, Default, PartialEq)]
struct ItemList {
    generation: u64,
    items: Vec<ClothItem>,
}

impl ItemList {
    fn new(ticket: Ticket, items: Vec<ClothItem>) -> Self {
        Self {
            generation: ticket.number(),
            items,
        }
    }

    /// Render keys are unique per response, so `For` rebuilds every card
    /// after a replacement
    fn keyed(&self) -> Vec<(String, ClothItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (format!("{}:{}", self.generation, index), item.clone()))
            .collect()
    }
}

#[component]
pub fn Clothes(
    #[prop(into)] selected_category: Signal<Option<String>>,
    #[prop(optional, into)] size: MaybeProp<String>,
    #[prop(optional, into)] available_only: MaybeProp<bool>,
) -> impl IntoView {
    let api_config = use_api_config();
    let (list, set_list) = signal(ItemList::default());
    let sequence = RequestSequence::new();

    // Refetch on mount and whenever a filter changes
    Effect::new(move |_| {
        let query = ClothesQuery {
            size: size.get(),
            available_only: available_only.get().unwrap_or(false),
            ..ClothesQuery::for_category(selected_category.get())
        };
        let config = api_config.clone();
        let url = query.to_url(&config);

        let (ticket, outcome) = fetch_once(&sequence, query, move |query| async move {
            api::list_clothes(&config, &query).await
        });
        web_sys::console::log_1(&format!("[Clothes] Fetching #{}: {}", ticket.number(), url).into());

        spawn_local(async move {
            match outcome.await {
                Outcome::Replace(loaded) => {
                    web_sys::console::log_1(&format!("[Clothes] Loaded {} items", loaded.len()).into());
                    set_list.set(ItemList::new(ticket, loaded));
                }
                Outcome::Stale => {
                    web_sys::console::log_1(&format!("[Clothes] Dropped stale response #{}", ticket.number()).into());
                }
                Outcome::Failed(e) => {
                    web_sys::console::error_1(&format!("[Clothes] Error loading clothes: {}", e).into());
                }
            }
        });
    });

    view! {
        <div>
            <div class="clothes-wrapper">
                <For
                    each=move || list.get().keyed()
                    key=|(key, _)| key.clone()
                    children=move |(_, item)| view! { <ClothCard item=item /> }
                />
            </div>
        </div>
    }
}
