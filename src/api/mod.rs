//! API Access Layer
//!
//! HTTP client wrapper plus one stateless façade per entity. Façades
//! translate verbs into paths and decode through the client; they never catch
//! errors, and list responses are normalized by the client regardless of
//! which shape the endpoint returns.

pub mod builders;
pub mod client;
pub mod companies;
pub mod contacts;
pub mod content;
pub mod funding;
pub mod industries;
pub mod investors;
pub mod models;
pub mod people;
pub mod registrations;
pub mod stats;

pub use client::{ApiError, Page};
