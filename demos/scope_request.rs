//! Walks through the life of a scope request: parse the caller's
//! parameters, validate and canonicalize them, query the result, and
//! serialize it for the wire.

use scopeset::{AuthenticationParameters, CallKind, ScopeSet};
use snafu::prelude::*;

#[snafu::report]
fn main() -> Result<(), snafu::Whatever> {
    // A request as it might arrive over a JSON boundary.
    let request: AuthenticationParameters = serde_json::from_str(
        r#"{ "scopes": ["User.Read", "Mail.Read", "MAIL.READ", "openid"] }"#,
    )
    .whatever_context("Failed to parse the request parameters")?;

    let client_id = "4f1af447-cb3e-4d2e-a213-93774a4ba4a4";

    let mut scopes = ScopeSet::from_request(&request, client_id, CallKind::AcquireToken)
        .whatever_context("The request failed scope validation")?;

    println!("canonical scopes:    {scopes}");
    println!(
        "grants mail access:  {}",
        scopes.contains_scopes(["mail.read"])
    );
    println!(
        "overlaps cached set: {}",
        scopes.check_scope_intersection(["offline_access", "user.read"])
    );

    // Strip the reserved scope before deriving a cache key.
    scopes.remove_scope("openid");
    println!("cache key fragment:  {}", scopes.print_scopes());

    // Logins may omit scopes entirely.
    let login = ScopeSet::from_request(
        &AuthenticationParameters::default(),
        client_id,
        CallKind::Login,
    )
    .whatever_context("The login failed scope validation")?;
    println!("login scope count:   {}", login.len());

    // Validation rejects the client ID when it is combined with other
    // scopes.
    let invalid = AuthenticationParameters::from_scopes([client_id, "mail.read"]);
    match ScopeSet::from_request(&invalid, client_id, CallKind::AcquireToken) {
        Ok(_) => whatever!("The client ID mixed with other scopes passed validation"),
        Err(err) => println!("rejected request:    {err}"),
    }

    Ok(())
}
