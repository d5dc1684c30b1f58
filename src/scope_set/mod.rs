//! The canonical scope set and its operations.
//!
//! [`ScopeSet`] owns the normalized form of the scopes one authentication
//! request asked for: validated against the owning client, lowercased,
//! deduplicated, in first-occurrence order. It is the value a client
//! compares cached grants against and serializes into the `OAuth2` `scope`
//! request parameter.

mod error;
mod validate;

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexSet;

use crate::request::AuthenticationParameters;

pub use error::ClientConfigurationError;

/// The kind of authentication call a scope request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// A call whose primary purpose is establishing identity. Scopes may be
    /// omitted entirely.
    Login,
    /// A call that acquires a token for explicitly requested scopes. Scopes
    /// are mandatory.
    AcquireToken,
}

impl CallKind {
    /// Whether a request of this kind must carry scopes.
    #[must_use]
    pub fn scopes_required(self) -> bool {
        matches!(self, CallKind::AcquireToken)
    }
}

/// A normalized, client-bound set of `OAuth2` authorization scopes.
///
/// Construction validates the request and canonicalizes its scopes:
/// surrounding whitespace is trimmed, entries that are empty after trimming
/// are dropped, the rest are lowercased and deduplicated, keeping the order
/// of first occurrence. Membership queries lowercase their inputs before the
/// lookup, so they are case-insensitive; removal is exact.
///
/// Equality ignores scope order: two sets are equal when they belong to the
/// same client and hold the same scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSet {
    /// The client the request belongs to. Kept exactly as supplied.
    client_id: Cow<'static, str>,
    /// The canonical scopes: lowercase, deduplicated, insertion-ordered.
    scopes: IndexSet<String>,
}

impl ScopeSet {
    /// Builds the canonical scope set for one authentication request.
    ///
    /// Validation runs first and checks the raw input as supplied; only a
    /// valid request is canonicalized. For [`CallKind::Login`] calls the
    /// extra-consent hook runs after canonicalization. It currently performs
    /// no merging, so extra-consent scopes never end up in the set.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientConfigurationError`] when the request omits scopes
    /// on a call that requires them, supplies them as something other than
    /// an array of strings, supplies an empty array, or combines the client
    /// ID with other scopes.
    pub fn from_request(
        request: &AuthenticationParameters,
        client_id: impl Into<Cow<'static, str>>,
        call: CallKind,
    ) -> Result<Self, ClientConfigurationError> {
        let client_id = client_id.into();
        let raw = validate::validate_input_scopes(
            request.scopes.as_ref(),
            &client_id,
            call.scopes_required(),
        )?;

        let mut scope_set = Self {
            client_id,
            scopes: canonicalize(raw),
        };
        if call == CallKind::Login {
            scope_set.append_extra_scopes_to_consent(request);
        }
        Ok(scope_set)
    }

    /// Checks whether at least one of the given scopes is in the set.
    ///
    /// Accepts any iterable of scope strings and lowercases each entry
    /// before the lookup. Empty input intersects nothing and yields `false`.
    #[must_use]
    pub fn check_scope_intersection<I>(&self, scopes: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        scopes
            .into_iter()
            .any(|scope| self.scopes.contains(scope.as_ref().to_lowercase().as_str()))
    }

    /// Checks whether every one of the given scopes is in the set.
    ///
    /// Accepts any iterable of scope strings and lowercases each entry
    /// before the lookup. Empty input is vacuously contained and yields
    /// `true`.
    #[must_use]
    pub fn contains_scopes<I>(&self, scopes: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        scopes
            .into_iter()
            .all(|scope| self.scopes.contains(scope.as_ref().to_lowercase().as_str()))
    }

    /// Removes the given scope from the set.
    ///
    /// The input is matched exactly, without case normalization, so only a
    /// lowercase input can match a canonical entry. Removing an absent scope
    /// is a no-op. The order of the remaining scopes is unchanged, which
    /// keeps [`ScopeSet::print_scopes`] stable across removals.
    pub fn remove_scope(&mut self, scope: &str) {
        self.scopes.shift_remove(scope);
    }

    /// Serializes the set as a space-delimited string.
    ///
    /// Scopes appear in insertion order, separated by single spaces, with no
    /// leading or trailing delimiter. An empty set serializes to the empty
    /// string. The output is suitable for the `scope` request parameter and
    /// for cache key fragments.
    #[must_use]
    pub fn print_scopes(&self) -> String {
        self.scopes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the client ID this scope request is bound to.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the number of canonical scopes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` when the set holds no scopes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Iterates the canonical scopes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Extension point for folding extra-consent scopes into a login call.
    ///
    /// Intentionally a no-op: the canonical set stays exactly as validated
    /// and the request's `extra_scopes_to_consent` is ignored. Callers must
    /// not rely on extra-consent scopes being queryable through the set.
    #[allow(clippy::unused_self)]
    fn append_extra_scopes_to_consent(&mut self, _request: &AuthenticationParameters) {}
}

impl fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_scopes())
    }
}

/// The canonical form of validated entries: trimmed, empty entries dropped,
/// lowercased, deduplicated in first-occurrence order.
fn canonicalize(raw: &[String]) -> IndexSet<String> {
    raw.iter()
        .filter_map(|scope| {
            let scope = scope.trim();
            (!scope.is_empty()).then(|| scope.to_lowercase())
        })
        .collect()
}
