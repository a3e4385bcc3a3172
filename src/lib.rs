//! # Inter Bank API client
//!
//! Typed client for Banco Inter's banking, cobrança and Pix REST APIs.
//! Every call authenticates with an OAuth2 client-credentials token that is
//! cached per client and refreshed lazily before it expires; every failure
//! surfaces as one [`ErrorResponse`] shape.
//!
//! Modules:
//! - `auth`: credentials, scopes and the access token
//! - `backend`: HTTP transport and the token manager
//! - `errors`: error normalization
//! - `banking`, `cobranca`, `pix`: API services
//! - `client`: facade and builder
//! - `config`: YAML configuration with env expansion
//! - `observability`: prometheus metrics

pub mod auth;
pub mod backend;
pub mod banking;
pub mod client;
pub mod cobranca;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod observability;
pub mod pix;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::auth::{Credentials, Scope, Token};
pub use crate::client::{Client, ClientBuilder};
pub use crate::errors::{Error, ErrorResponse, Result, Violation};
