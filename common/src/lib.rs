//! Shared model and client-side rules for the gradedesk front-end.
//!
//! Everything in this crate runs without a browser: the wire model mirrored
//! from the REST API, the session store, the attempt flow, form validation and
//! the async orchestrations that issue several API calls in a fixed order.
//! The WASM application in `frontend` supplies the browser-backed pieces
//! (token storage, HTTP gateways, timers).

pub mod attempt;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod menu;
pub mod model;
pub mod notice;
pub mod session;
pub mod validation;
