//! VentureScope Dashboard
//!
//! Browser dashboard for exploring a startup ecosystem directory, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Directory browsing: companies, investors, people, funding rounds
//! - Ecosystem builders: hubs, incubators, accelerators, universities
//! - Registration flows for companies and organizations
//! - Admin moderation console for submissions and contact messages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data comes from the directory REST API over HTTP; the
//! client holds no state beyond the two auth tokens in local storage.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
