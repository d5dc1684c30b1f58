//! Normalized `OAuth2` scope handling for authentication clients.
//!
//! A [`ScopeSet`] is the canonical, client-bound form of the scopes one
//! authentication request asked for: validated, lowercased, deduplicated,
//! and ordered for reproducible serialization. An authentication client
//! builds one from the caller's [`AuthenticationParameters`], compares it
//! against cached grants, and serializes it into the `scope` request
//! parameter.
//!
//! ```rust
//! use scopeset::{AuthenticationParameters, CallKind, ScopeSet};
//!
//! # fn main() -> Result<(), scopeset::ClientConfigurationError> {
//! let request = AuthenticationParameters::builder()
//!     .scopes(["User.Read", "Mail.Read", "MAIL.READ"])
//!     .build();
//!
//! let scopes = ScopeSet::from_request(&request, "my-client-id", CallKind::AcquireToken)?;
//!
//! assert!(scopes.contains_scopes(["mail.read"]));
//! assert_eq!(scopes.print_scopes(), "user.read mail.read");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

mod error;
pub mod request;
pub mod scope_set;

pub use error::{BoxedError, Error};
pub use request::{AuthenticationParameters, ScopesValue};
pub use scope_set::{CallKind, ClientConfigurationError, ScopeSet};

/// Documentation
pub mod _documentation {
    #[doc = include_str!("../README.md")]
    mod readme {}
    #[doc = include_str!("../CHANGELOG.md")]
    pub mod changelog {}
}
