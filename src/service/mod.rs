//! Payload validation applied before any storage call.

mod validation;
pub use validation::RequestValidator;
