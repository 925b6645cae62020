//! Search form suppression and the live category filter.

use placid_core::{
    CategoryCard, apply_filter,
    config::SearchHooks,
    search::CATEGORY_ATTR,
};
use web_sys::Element;

use crate::{
    error::Result,
    page::{claim, control_value, listen, query_all, report},
};

/// Stop every search form from submitting.
pub fn suppress_search_forms(forms: Vec<Element>) -> Result<()> {
    log::debug!("suppressing {} search form(s)", forms.len());
    for form in forms {
        if !claim(&form, "search")? {
            continue;
        }
        listen(&form, "submit", |event| event.prevent_default())?;
    }
    Ok(())
}

/// Filter the cards inside `group` as the user types into `input`.
///
/// Disabled when the group or the input is missing; `feedback` is optional.
pub fn setup_category_filter(
    group: Option<Element>,
    input: Option<Element>,
    feedback: Option<Element>,
    hooks: &SearchHooks,
) -> Result<()> {
    let (Some(group), Some(input)) = (group, input) else {
        log::debug!("category filter not present, skipping");
        return Ok(());
    };
    if !claim(&input, "filter")? {
        log::debug!("category filter already wired");
        return Ok(());
    }

    let cards = query_all(&group, &hooks.card);
    log::debug!("category filter bound to {} card(s)", cards.len());

    let hidden_class = hooks.hidden_class.clone();
    let source = input.clone();
    listen(&input, "input", move |_| {
        let value = control_value(&source).unwrap_or_default();
        report(
            "category filter",
            filter_cards(&value, &cards, feedback.as_ref(), &hidden_class),
        );
    })
}

/// Apply `raw_query` to `cards`, updating their hidden class and `feedback`.
pub fn filter_cards(
    raw_query: &str,
    cards: &[Element],
    feedback: Option<&Element>,
    hidden_class: &str,
) -> Result<()> {
    let snapshot: Vec<CategoryCard> = cards.iter().map(read_card).collect();
    let outcome = apply_filter(raw_query, &snapshot);

    for (card, visible) in cards.iter().zip(&outcome.visible) {
        card.class_list().toggle_with_force(hidden_class, !visible)?;
    }

    if let Some(feedback) = feedback {
        feedback.set_text_content(Some(&outcome.feedback));
    }
    Ok(())
}

fn read_card(card: &Element) -> CategoryCard {
    CategoryCard::new(
        card.get_attribute(CATEGORY_ATTR).unwrap_or_default(),
        card.text_content().unwrap_or_default(),
    )
}
