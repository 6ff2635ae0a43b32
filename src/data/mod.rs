//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! leave entity-to-domain conversion to the service layer. All database queries are
//! performed through these repositories.

pub mod category;
pub mod server;
pub mod user;
