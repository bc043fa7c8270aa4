//! One async function per REST operation, grouped by area. Each returns the
//! decoded body or an [`common::error::ApiError`]; nothing is cached.
//!
//! The orchestrations in `common::gateway` run over [`ApiClient`] through the
//! trait implementations kept next to the functions they forward to.

pub mod attempts;
pub mod auth;
pub mod client;
pub mod disciplines;
pub mod groups;
pub mod materials;
pub mod news;
pub mod progress;
pub mod questions;
pub mod schedules;
pub mod tests;
pub mod topics;
pub mod users;

pub use client::ApiClient;
