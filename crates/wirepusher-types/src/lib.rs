pub mod api;
pub mod directory;
pub mod models;

pub use directory::{DirectoryError, UserDirectory, UserEntry};
pub use models::{Message, User, UserError};
