//! HTTP layer: middleware, handlers, and response DTOs.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Visit logging and tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
