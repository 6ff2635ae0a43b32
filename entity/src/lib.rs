//! SeaORM entity models for the chat-server directory.
//!
//! Entities map one-to-one to database tables created by the `migration`
//! crate. The `prelude` module re-exports each entity under its table name
//! for concise use in queries and test schema setup.

pub mod category;
pub mod server;
pub mod server_member;
pub mod user;

pub mod prelude {
    pub use crate::category::Entity as Category;
    pub use crate::server::Entity as Server;
    pub use crate::server_member::Entity as ServerMember;
    pub use crate::user::Entity as User;
}
