//! State Management
//!
//! Filter/query state, request sequencing, and UI notices.

pub mod fetch;
pub mod filters;
pub mod notices;

pub use fetch::RequestSequence;
pub use filters::{FilterQuery, PAGE_SIZE};
pub use notices::{provide_notices, use_notices, Notices};
