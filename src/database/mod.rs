pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod session;
pub mod setup;
pub mod store;

pub use connection::{DbConn, DbPool, create_pool, get_connection};
pub use models::*;
pub use session::Database;
pub use store::TournamentStore;
