//! Shared test tooling for the chat-server directory backend.
//!
//! Tests run against in-memory SQLite. `TestBuilder` configures which entity
//! tables exist, `TestContext` owns the lazily-created database connection
//! and session, and `factory` seeds entity rows with unique defaults.
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_servers() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_directory_tables().build().await?;
//!     let db = test.db.unwrap();
//!
//!     // seed via factory, exercise the repository under test
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
