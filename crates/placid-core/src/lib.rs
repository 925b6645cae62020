//! Placid Core Library
//!
//! Target-independent state and validation for the Placid site interactions:
//! the theme preference, the navigation panel flag, the category filter and
//! the contact form. The browser runtime (`placid-dom`) and the Leptos
//! components (`placid-ui`) both drive their DOM from these types.

pub mod config;
pub mod contact;
pub mod error;
pub mod navigation;
pub mod search;
pub mod storage;
pub mod theme;

pub use config::HookConfig;
pub use contact::{ContactSubmission, FeedbackState, Field, SubmissionOutcome, validate_email};
pub use error::{CoreError, Result};
pub use navigation::NavState;
pub use search::{CategoryCard, FilterOutcome, apply_filter, normalize_query};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{THEME_STORAGE_KEY, Theme, ThemeController, ThemeIndicator};
