pub mod book;
mod dependencies;
mod errors;
pub mod user;

pub use dependencies::ServiceDependencies;
pub use errors::{ApplicationError, Result};
