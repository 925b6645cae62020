//! Category search components.
//!
//! Provides SearchForm and CategoryFilter Leptos components.

use leptos::prelude::*;
use placid_core::{CategoryCard, apply_filter};

/// Search form wrapper whose submission never leaves the page.
#[component]
pub fn SearchForm(children: Children) -> impl IntoView {
    view! {
      <form
        class="search-form"
        role="search"
        on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()
      >
        {children()}
      </form>
    }
}

/// Live-filtered grid of category cards.
///
/// Every keystroke re-runs the substring match over all cards.
#[component]
pub fn CategoryFilter(
    /// Cards to display.
    cards: Vec<CategoryCard>,
    /// Placeholder text for the input.
    #[prop(default = "Search categories...".to_string())]
    placeholder: String,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let cards = StoredValue::new(cards);
    let outcome = Memo::new(move |_| {
        let raw = query.get();
        cards.with_value(|cards| apply_filter(&raw, cards))
    });

    view! {
      <section class="category-filter">
        <SearchForm>
          <label class="search-label">
            <span class="visually-hidden">"Search categories"</span>
            <input
              id="search-input"
              type="search"
              class="search-input"
              placeholder=placeholder
              prop:value=move || query.get()
              on:input=move |ev| query.set(event_target_value(&ev))
            />
          </label>
        </SearchForm>
        <p class="search-feedback" aria-live="polite">
          {move || outcome.with(|o| o.feedback.clone())}
        </p>
        <div class="category-grid" data-filter-group="">
          {cards
            .get_value()
            .into_iter()
            .enumerate()
            .map(|(index, card)| {
              let hidden = move || {
                !outcome.with(|o| o.visible.get(index).copied().unwrap_or(true))
              };
              view! {
                <article class="category-card" data-category=card.category class:is-hidden=hidden>
                  <p>{card.text}</p>
                </article>
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}
