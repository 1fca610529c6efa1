//! File Overview
//!
//! Browser front end for the File Overview System, built with Leptos (WASM).
//!
//! # Features
//!
//! - Account registration and login against the overview backend
//! - Drag & drop upload with a model choice
//! - Upload history with stored overviews
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Every backend call is plain HTTP with browser cookies included; the backend
//! origin comes from local storage or the `OVERVIEW_API_URL` build variable.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
