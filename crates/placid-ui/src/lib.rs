//! Placid UI Components
//!
//! Leptos components rendering the Placid page interactions. They produce the
//! same markup hooks as the static templates, so the stylesheet applies
//! unchanged.
//!
//! # Components
//!
//! ## Theme
//! - [`ThemeToggle`] - Light/dark switch persisted to `localStorage`
//!
//! ## Navigation
//! - [`MenuToggle`] - Button opening the navigation on small screens
//! - [`PrimaryNavigation`] - Main site navigation panel
//!
//! ## Search
//! - [`SearchForm`] - Form wrapper that never submits
//! - [`CategoryFilter`] - Live-filtered grid of category cards
//!
//! ## Contact
//! - [`ContactForm`] - Contact form with inline validation
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use placid_core::NavState;
//! use placid_ui::{MenuToggle, NavItem, PrimaryNavigation, ThemeToggle};
//!
//! #[component]
//! fn Header() -> impl IntoView {
//!     let nav = RwSignal::new(NavState::default());
//!     let items = Signal::derive(|| vec![NavItem::new("Home", "/")]);
//!
//!     view! {
//!         <ThemeToggle />
//!         <MenuToggle state=nav />
//!         <PrimaryNavigation items=items state=nav />
//!     }
//! }
//! ```

pub mod contact;
pub mod navigation;
pub mod search;
pub mod theme;

pub use contact::{ContactForm, SubjectOption, default_subjects};
pub use navigation::{MenuToggle, NavItem, PrimaryNavigation};
pub use search::{CategoryFilter, SearchForm};
pub use theme::ThemeToggle;
