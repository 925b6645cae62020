//! Site navigation with a collapsible panel for small viewports.
//!
//! Provides MenuToggle and PrimaryNavigation, which share one open flag.

use leptos::prelude::*;
use placid_core::NavState;
use serde::{Deserialize, Serialize};

/// A navigation item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link URL.
    pub url: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Whether `path` is this item's page or below it. The root item only
    /// matches the root.
    pub fn is_active(&self, path: &str) -> bool {
        let base = self.url.trim_end_matches('/');
        if base.is_empty() {
            return path == "/" || path.is_empty();
        }
        path == self.url || path.starts_with(&format!("{base}/"))
    }
}

/// Button opening and closing the primary navigation.
#[component]
pub fn MenuToggle(
    /// Shared open flag.
    state: RwSignal<NavState>,
) -> impl IntoView {
    view! {
      <button
        type="button"
        class="menu-toggle"
        aria-controls="primary-navigation"
        aria-expanded=move || state.get().as_attr()
        on:click=move |_| state.update(|s| *s = s.toggled())
      >
        "Menu"
      </button>
    }
}

/// Main navigation panel.
#[component]
pub fn PrimaryNavigation(
    /// Navigation items.
    items: Signal<Vec<NavItem>>,
    /// Shared open flag.
    state: RwSignal<NavState>,
    /// Current path for active highlighting.
    #[prop(default = "/".to_string().into())]
    current_path: Signal<String>,
) -> impl IntoView {
    view! {
      <nav
        id="primary-navigation"
        class="primary-navigation"
        aria-label="Main navigation"
        data-open=move || state.get().as_attr()
      >
        <ul class="primary-navigation__list">
          <For
            each=move || items.get()
            key=|item| item.url.clone()
            children=move |item| {
              let active_item = item.clone();
              let is_active = Memo::new(move |_| active_item.is_active(&current_path.get()));
              view! {
                <li class="primary-navigation__item" class:active=is_active>
                  <a
                    href=item.url.clone()
                    aria-current=move || { if is_active.get() { Some("page") } else { None } }
                  >
                    {item.label.clone()}
                  </a>
                </li>
              }
            }
          />

        </ul>
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_creation() {
        let item = NavItem::new("Home", "/");
        assert_eq!(item.label, "Home");
        assert_eq!(item.url, "/");
    }

    #[test]
    fn test_nav_item_active_paths() {
        let item = NavItem::new("Categories", "/categories");
        assert!(item.is_active("/categories"));
        assert!(item.is_active("/categories/garden"));
        assert!(!item.is_active("/categories-old"));
        assert!(!item.is_active("/"));
    }

    #[test]
    fn test_root_item_only_matches_root() {
        let item = NavItem::new("Home", "/");
        assert!(item.is_active("/"));
        assert!(!item.is_active("/contact"));
    }

    #[test]
    fn test_nav_item_serialization() {
        let item = NavItem::new("Contact", "/contact");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"label\":\"Contact\""));
        assert!(json.contains("\"url\":\"/contact\""));
    }
}
