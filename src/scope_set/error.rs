use snafu::Snafu;

use crate::error::BoxedError;

/// Validation failures raised while constructing a [`ScopeSet`](super::ScopeSet).
///
/// These are configuration errors: the request the application assembled is
/// wrong, and sending it again will not help. Checks run in a fixed order
/// and the first violation wins, so a request that is broken in several ways
/// reports the first problem in the order the variants are declared here.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum ClientConfigurationError {
    /// Scopes were mandatory for this call but the request did not carry any.
    #[snafu(display("Scopes are required for this call, but none were supplied"))]
    ScopesRequired,

    /// The scopes value was something other than an array of strings.
    #[snafu(display("Scopes must be supplied as an array of strings, got: {value}"))]
    ScopesNonArray {
        /// The rejected value, rendered as JSON.
        value: String,
    },

    /// The scopes array was empty.
    #[snafu(display("Scopes array must contain at least one scope"))]
    EmptyScopesArray,

    /// The client ID was requested together with other scopes.
    #[snafu(display(
        "The client ID may only be requested as the sole scope, got: [{scopes}]"
    ))]
    ClientIdSingleScope {
        /// The scopes of the offending request, comma separated.
        scopes: String,
    },
}

impl crate::Error for ClientConfigurationError {
    fn is_retryable(&self) -> bool {
        false
    }
}

impl From<ClientConfigurationError> for BoxedError {
    fn from(err: ClientConfigurationError) -> Self {
        BoxedError::from_err(err)
    }
}
