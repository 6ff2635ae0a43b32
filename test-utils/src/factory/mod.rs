//! Entity factories for seeding test data.
//!
//! Each factory inserts a row with unique defaults; override fields through
//! the builder when a test cares about a value. `helpers` wires up foreign
//! key dependencies (owner user and category for a server) in one call.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (owner, category, server) =
//!     factory::helpers::create_server_with_dependencies(db).await?;
//!
//! let gaming = factory::category::CategoryFactory::new(db)
//!     .name("gaming")
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use server::create_server;
pub use server_member::add_member;
pub use user::create_user;
