//! HTTP transport, token lifecycle and response normalization shared by all services.

pub mod backend;
pub mod token_manager;

pub use backend::{Backend, BackendSettings};
pub(crate) use backend::endpoint;
pub use token_manager::TokenManager;
