use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};
use placid_core::{CategoryCard, NavState};
use placid_ui::{CategoryFilter, ContactForm, MenuToggle, NavItem, PrimaryNavigation, ThemeToggle};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Title text="Placid" />
      <Meta name="description" content="Calm tools and supplies for home and garden." />

      <Router>
        <SiteHeader />
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage />
            <Route path=StaticSegment("categories") view=CategoriesPage />
            <Route path=StaticSegment("contact") view=ContactPage />
          </Routes>
        </main>
      </Router>
    }
}

/// Links shown in the primary navigation.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("Categories", "/categories"),
        NavItem::new("Contact", "/contact"),
    ]
}

/// Categories listed on the site.
pub fn featured_categories() -> Vec<CategoryCard> {
    vec![
        CategoryCard::new("garden", "Garden Tools: spades, shears and gloves"),
        CategoryCard::new("kitchen", "Kitchenware: pans, knives and linens"),
        CategoryCard::new("lighting", "Lighting: lamps and soft bulbs"),
        CategoryCard::new("textiles", "Textiles: throws, cushions and rugs"),
        CategoryCard::new("stationery", "Stationery: notebooks and pens"),
    ]
}

/// Site header with theme switch and collapsible navigation.
#[component]
fn SiteHeader() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;
    let current_path = Signal::derive(move || pathname.get());

    // Close the panel after navigating.
    Effect::new(move |_| {
        pathname.track();
        nav.set(NavState::default());
    });

    view! {
      <header class="site-header">
        <a href="/" class="site-header__brand">
          "Placid"
        </a>
        <MenuToggle state=nav />
        <PrimaryNavigation items=Signal::derive(nav_items) state=nav current_path=current_path />
        <ThemeToggle />
      </header>
    }
}

/// Renders the home page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
      <section class="hero">
        <h1>"Everything for a quieter home"</h1>
        <p>"Browse our categories or get in touch with the team."</p>
        <a href="/categories" class="button">
          "Browse categories"
        </a>
      </section>
    }
}

/// Renders the searchable category grid.
#[component]
fn CategoriesPage() -> impl IntoView {
    view! {
      <h1>"Categories"</h1>
      <CategoryFilter cards=featured_categories() />
    }
}

/// Renders the contact form.
#[component]
fn ContactPage() -> impl IntoView {
    view! {
      <h1>"Contact us"</h1>
      <p>"We read every message and reply within 48 hours."</p>
      <ContactForm />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_are_unique() {
        let items = nav_items();
        let mut urls: Vec<_> = items.iter().map(|item| item.url.as_str()).collect();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), items.len());
    }

    #[test]
    fn test_featured_categories_are_searchable() {
        let cards = featured_categories();
        let outcome = placid_core::apply_filter("garden", &cards);
        assert_eq!(outcome.visible_count, 1);
        assert_eq!(outcome.feedback, "Showing 1 category for \"garden\"");
    }
}
