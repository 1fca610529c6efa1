//! Backend API
//!
//! HTTP calls to the overview backend and the types they exchange.

pub mod client;
pub mod types;

pub use client::*;
pub use types::{FileEntry, Model};
