//! Pix API: received transfers, refunds, immediate and due-date charges, webhooks.

/// Integer-coded enum carried as a JSON number.
macro_rules! numeric_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $($variant = $value),+
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(value: u8) -> ::std::result::Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("invalid {} {}", stringify!($name), other)),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }
    };
}

pub mod cob;
pub mod cob_types;
pub mod cobv;
pub mod cobv_types;
pub mod transacoes;
pub mod types;
pub mod webhook;
pub mod webhook_types;

use std::sync::Arc;

use crate::backend::{endpoint, Backend};

pub use cob_types::*;
pub use cobv_types::*;
pub use types::*;
pub use webhook_types::*;

const ENDPOINT_PIX: [&str; 2] = ["pix", "v2"];

#[derive(Clone)]
pub struct Service {
    backend: Arc<Backend>,
}

impl Service {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    fn path<'a>(&self, rest: &[&'a str]) -> Vec<&'a str> {
        endpoint(&ENDPOINT_PIX, rest)
    }
}
