//! Validation of the raw scope input of a request.

use crate::request::ScopesValue;

use super::error::{
    ClientConfigurationError, ClientIdSingleScopeSnafu, EmptyScopesArraySnafu,
    ScopesNonArraySnafu, ScopesRequiredSnafu,
};

/// Checks the raw `scopes` value of a request against the owning client.
///
/// The checks run in order and the first violation wins:
///
/// 1. absent scopes fail only when `scopes_required`;
/// 2. the value must be an array of strings;
/// 3. the array must not be empty;
/// 4. the client ID may only be requested as the sole scope.
///
/// The client ID comparison is exact and happens before any lowercasing, so
/// a differently-cased client ID among the scopes passes validation and is
/// treated as an ordinary resource scope.
///
/// Returns the validated entries as supplied; canonicalization is the
/// caller's concern.
pub(super) fn validate_input_scopes<'a>(
    scopes: Option<&'a ScopesValue>,
    client_id: &str,
    scopes_required: bool,
) -> Result<&'a [String], ClientConfigurationError> {
    let Some(value) = scopes else {
        if scopes_required {
            return ScopesRequiredSnafu.fail();
        }
        return Ok(&[]);
    };

    let entries = match value {
        ScopesValue::List(entries) => entries,
        ScopesValue::Other(other) => {
            return ScopesNonArraySnafu {
                value: other.to_string(),
            }
            .fail();
        }
    };

    if entries.is_empty() {
        return EmptyScopesArraySnafu.fail();
    }

    if entries.len() > 1 && entries.iter().any(|scope| scope == client_id) {
        return ClientIdSingleScopeSnafu {
            scopes: entries.join(", "),
        }
        .fail();
    }

    Ok(entries)
}
