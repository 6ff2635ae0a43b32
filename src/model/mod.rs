//! DTOs, domain models, and operation parameter types.
//!
//! DTOs carry serde and utoipa derives and define the wire format; domain
//! models and parameter types are what the service and data layers exchange.
//! Conversion between the two happens at the controller boundary.

pub mod api;
pub mod category;
pub mod server;
pub mod user;
