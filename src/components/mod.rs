//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod filter_panel;
pub mod forms;
pub mod guards;
pub mod loading;
pub mod nav;
pub mod pagination;
pub mod stat_card;
pub mod toast;

pub use filter_panel::{FilterGroup, SearchBar};
pub use forms::{FieldError, SelectField, TextArea, TextField};
pub use guards::{RedirectAuthenticated, RequireSession};
pub use loading::{CardSkeleton, ListSkeleton, LoadError, Loading};
pub use nav::Nav;
pub use pagination::Pagination;
pub use stat_card::{format_usd, StatCard};
pub use toast::Toast;
