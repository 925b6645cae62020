//! End-to-end behaviour of the four site interactions, driven through the
//! public core API the way the browser runtime drives it.

use placid_core::{
    CategoryCard, ContactSubmission, Field, KeyValueStore, MemoryStore, NavState,
    THEME_STORAGE_KEY, Theme, ThemeController, apply_filter, contact::ERROR_MESSAGE,
    contact::SUCCESS_MESSAGE, validate_email,
};

#[test]
fn theme_preference_tracks_click_parity() {
    for clicks in 1..=6 {
        let store = MemoryStore::new();
        let controller = ThemeController::new(store.clone());
        let mut theme = controller.initial();

        for _ in 0..clicks {
            theme = controller.toggle(theme);
            assert_eq!(theme.indicator().pressed, theme.is_dark());
        }

        let expected = if clicks % 2 == 1 { "dark" } else { "light" };
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some(expected));
    }
}

#[test]
fn theme_reload_restores_dark() {
    let store = MemoryStore::new();
    let first_visit = ThemeController::new(store.clone());
    let theme = first_visit.toggle(first_visit.initial());
    assert_eq!(theme, Theme::Dark);

    let second_visit = ThemeController::new(store);
    assert_eq!(second_visit.initial(), Theme::Dark);
}

#[test]
fn navigation_open_flag_tracks_click_parity() {
    let mut state = NavState::from_attr(None);
    for clicks in 1..=5 {
        state = NavState::from_attr(Some(state.toggled().as_attr()));
        assert_eq!(state.open, clicks % 2 == 1);
    }
}

#[test]
fn search_filter_matches_examples() {
    let cards = vec![
        CategoryCard::new("fruit", "Apple Pie"),
        CategoryCard::new("tool", "Hammer Set"),
    ];

    let outcome = apply_filter("pie", &cards);
    assert_eq!(outcome.visible, vec![true, false]);
    assert_eq!(outcome.feedback, "Showing 1 category for \"pie\"");

    let outcome = apply_filter("", &cards);
    assert_eq!(outcome.visible, vec![true, true]);
    assert_eq!(outcome.feedback, "");

    let outcome = apply_filter("xyz", &cards);
    assert_eq!(outcome.visible_count, 0);
    assert_eq!(
        outcome.feedback,
        "No categories found for \"xyz\". Try a different search."
    );
}

#[test]
fn email_examples() {
    assert!(validate_email("a@b.co"));
    assert!(!validate_email(""));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a b@c.com"));
    assert!(!validate_email("@b.com"));
}

#[test]
fn contact_rejects_partial_submission() {
    let submission = ContactSubmission {
        full_name: String::new(),
        email: "bad".to_string(),
        subject: String::new(),
        message: "hi".to_string(),
    };

    let outcome = submission.validate();
    assert!(!outcome.is_accepted());
    assert_eq!(
        outcome.invalid_fields(),
        &[Field::FullName, Field::Email, Field::Subject]
    );
    assert_eq!(outcome.feedback().message(), ERROR_MESSAGE);
}

#[test]
fn contact_accepts_complete_submission() {
    let submission = ContactSubmission {
        full_name: "Grace Hopper".to_string(),
        email: "grace@navy.mil".to_string(),
        subject: "support".to_string(),
        message: "Found a moth.".to_string(),
    };

    let outcome = submission.validate();
    assert!(outcome.is_accepted());
    assert_eq!(outcome.feedback().message(), SUCCESS_MESSAGE);
}
