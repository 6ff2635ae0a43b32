//! HTTP request handlers, access control, and DTO conversion.

pub mod auth;
pub mod category;
pub mod server;
