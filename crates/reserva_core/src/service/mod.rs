//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the atomic booking transaction; keep HTTP layers decoupled from
//!   storage details.

pub mod booking_service;
pub mod reservation_service;
