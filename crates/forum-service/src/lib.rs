//! # forum-service
//!
//! Application layer containing the forum use cases, DTOs and the
//! dependency container shared by every service.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use dto::*;
pub use services::*;
