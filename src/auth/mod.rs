//! Application credentials, OAuth scopes and the issued token.

pub mod credentials;
pub mod scopes;
pub mod token;

pub use credentials::Credentials;
pub use scopes::Scope;
pub use token::Token;
