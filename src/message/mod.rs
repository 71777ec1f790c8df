pub mod interceptor;
pub mod template;

pub use interceptor::MessageInterceptor;
pub use template::{NotFoundMessage, PLACEHOLDER};
