//! HTTP protocol layer module
//!
//! Status-code builders, MIME detection and conditional-request helpers,
//! decoupled from the cuisine business logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_500_response, build_options_response,
};
