pub mod get_or_throw;

pub use get_or_throw::{DEFAULT_ERROR_MESSAGE, GetOrThrow};
