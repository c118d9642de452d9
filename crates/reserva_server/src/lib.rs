//! HTTP surface for the reservation booking engine.
//!
//! The library half exposes the router, state, and payload types so the
//! binary and the integration tests build the exact same application.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
