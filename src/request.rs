//! Caller-supplied authentication request parameters.
//!
//! [`AuthenticationParameters`] is the bag of inputs an application hands to
//! an authentication client when it starts a login or asks for a token. This
//! crate only interprets the scope-related fields; everything else a request
//! may carry stays with the surrounding client.
//!
//! Requests frequently cross a JSON boundary before they reach scope
//! validation, and a caller on the far side of that boundary can put
//! anything under `scopes`. [`ScopesValue`] keeps such malformed input
//! representable instead of failing deserialization, so validation can
//! reject it with a proper configuration error.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The raw `scopes` value of a request, before validation.
///
/// Deserialization is deliberately lenient: anything that is not an array of
/// strings is captured as [`ScopesValue::Other`] and rejected later by scope
/// validation, with the offending value echoed in the error. A JSON `null`
/// is treated as an absent field, not as an `Other` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopesValue {
    /// A proper sequence of scope strings.
    List(Vec<String>),
    /// Anything else: a bare string, a number, an object, or an array with
    /// non-string entries.
    Other(Value),
}

impl<S: Into<String>> FromIterator<S> for ScopesValue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for ScopesValue {
    fn from(scopes: Vec<String>) -> Self {
        Self::List(scopes)
    }
}

impl From<Vec<&str>> for ScopesValue {
    fn from(scopes: Vec<&str>) -> Self {
        scopes.into_iter().collect()
    }
}

/// Parameters of a single authentication call.
///
/// Both fields are optional at this level. Whether missing scopes are
/// acceptable depends on the kind of call, which is decided at validation
/// time, not here.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
pub struct AuthenticationParameters {
    /// The scopes the application requests access to, exactly as supplied.
    ///
    /// Setting this to an empty sequence is not the same as leaving it
    /// unset: an empty sequence fails validation, an absent one may not.
    #[builder(with = |scopes: impl IntoIterator<Item = impl Into<String>>| scopes.into_iter().collect())]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<ScopesValue>,

    /// Additional scopes to request consent for during a login, without
    /// asking for access to them in the resulting token.
    #[builder(with = |scopes: impl IntoIterator<Item = impl Into<String>>| scopes.into_iter().map(Into::into).collect())]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_scopes_to_consent: Option<Vec<String>>,
}

impl AuthenticationParameters {
    /// Creates a request containing just the given scopes.
    ///
    /// This covers most token-acquisition calls. Use
    /// [`AuthenticationParameters::builder`] for requests that also carry
    /// extra-consent scopes.
    pub fn from_scopes(scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::builder().scopes(scopes).build()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// A request without scope fields deserializes to empty options.
    #[test]
    fn missing_fields_deserialize_to_none() {
        let request: AuthenticationParameters =
            serde_json::from_value(json!({})).unwrap();

        assert_eq!(request, AuthenticationParameters::default());
        assert!(request.scopes.is_none(), "Scopes should be absent");
        assert!(
            request.extra_scopes_to_consent.is_none(),
            "Extra consent scopes should be absent"
        );
    }

    /// A JSON `null` under `scopes` counts as an absent field.
    #[test]
    fn null_scopes_deserialize_to_none() {
        let request: AuthenticationParameters =
            serde_json::from_value(json!({ "scopes": null })).unwrap();

        assert!(request.scopes.is_none(), "Null scopes should be absent");
    }

    /// An array of strings lands in the `List` variant.
    #[test]
    fn string_array_deserializes_to_list() {
        let request: AuthenticationParameters =
            serde_json::from_value(json!({ "scopes": ["User.Read", "Mail.Read"] })).unwrap();

        assert_eq!(
            request.scopes,
            Some(ScopesValue::List(vec![
                "User.Read".to_string(),
                "Mail.Read".to_string()
            ]))
        );
    }

    /// Malformed scope values survive deserialization as `Other` instead of
    /// failing it, so validation can reject them with a useful error.
    #[test]
    fn malformed_scopes_deserialize_to_other() {
        for malformed in [
            json!("User.Read"),
            json!(42),
            json!({ "scope": "User.Read" }),
            json!(["User.Read", 42]),
        ] {
            let request: AuthenticationParameters =
                serde_json::from_value(json!({ "scopes": malformed })).unwrap();

            assert_eq!(
                request.scopes,
                Some(ScopesValue::Other(malformed)),
                "Non-string-array scopes should be captured verbatim"
            );
        }
    }

    /// The builder accepts any iterable of string-likes for both fields.
    #[test]
    fn builder_collects_scope_iterables() {
        let request = AuthenticationParameters::builder()
            .scopes(["User.Read", "Mail.Read"])
            .extra_scopes_to_consent(vec!["Calendar.Read".to_string()])
            .build();

        assert_eq!(
            request.scopes,
            Some(ScopesValue::List(vec![
                "User.Read".to_string(),
                "Mail.Read".to_string()
            ]))
        );
        assert_eq!(
            request.extra_scopes_to_consent,
            Some(vec!["Calendar.Read".to_string()])
        );
    }

    /// Unset builder fields stay `None`, matching a request that never
    /// mentioned them.
    #[test]
    fn builder_defaults_to_absent_fields() {
        let request = AuthenticationParameters::builder().build();

        assert_eq!(request, AuthenticationParameters::default());
    }

    /// The scopes shortcut builds the same request as the builder.
    #[test]
    fn from_scopes_matches_builder() {
        assert_eq!(
            AuthenticationParameters::from_scopes(["User.Read"]),
            AuthenticationParameters::builder().scopes(["User.Read"]).build()
        );
    }

    /// Vectors of owned or borrowed strings convert into a scopes value, so
    /// requests can also be assembled as plain struct literals.
    #[test]
    fn scopes_value_converts_from_vectors() {
        let expected = ScopesValue::List(vec!["User.Read".to_string()]);

        assert_eq!(ScopesValue::from(vec!["User.Read"]), expected);
        assert_eq!(ScopesValue::from(vec!["User.Read".to_string()]), expected);

        let request = AuthenticationParameters {
            scopes: Some(vec!["User.Read"].into()),
            extra_scopes_to_consent: None,
        };
        assert_eq!(request, AuthenticationParameters::from_scopes(["User.Read"]));
    }
}
