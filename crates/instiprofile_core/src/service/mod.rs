//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into profile-editing and message-log APIs.
//! - Supply the current time from an injected clock.

pub mod message_service;
pub mod profile_service;
