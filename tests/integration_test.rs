//! End-to-end scenarios for the authorization policy.

use authz_core::{
    ApiKey, AuthorizationPolicy, Capability, Credentials, ErrorKind, StaticIdentityProvider,
    SERVICE_PRINCIPAL_ID,
};

fn policy() -> AuthorizationPolicy<StaticIdentityProvider> {
    let mut provider = StaticIdentityProvider::new();
    provider.insert("tok-u1", "u1", Some("u1@example.com"));
    provider.insert("tok-u2", "u2", None);
    AuthorizationPolicy::new(provider).with_api_key(ApiKey::new("secret-key".to_string()))
}

#[test]
fn owner_may_mutate_owned_resource() {
    let decision = policy().authorize(
        &Credentials::bearer("tok-u1"),
        &Capability::WriteOwned {
            owner_id: Some("u1".to_string()),
        },
    );

    assert!(decision.allowed);
    assert_eq!(decision.http_status, 200);
    assert!(decision.grant().is_some());
}

#[test]
fn non_owner_gets_403() {
    let decision = policy().authorize(
        &Credentials::bearer("tok-u1"),
        &Capability::WriteOwned {
            owner_id: Some("u2".to_string()),
        },
    );

    assert!(!decision.allowed);
    assert_eq!(decision.http_status, 403);
    assert!(decision.grant().is_none());
}

#[test]
fn api_key_overrides_foreign_ownership() {
    let decision = policy().authorize(
        &Credentials::api_key("secret-key"),
        &Capability::WriteOwned {
            owner_id: Some("someone-else".to_string()),
        },
    );

    assert!(decision.allowed);
    assert_eq!(decision.principal().unwrap().id, SERVICE_PRINCIPAL_ID);
}

#[test]
fn anonymous_public_is_allowed() {
    let decision = policy().authorize(&Credentials::Absent, &Capability::Public);

    assert!(decision.allowed);
    assert!(decision.principal().is_none());
}

#[test]
fn anonymous_protected_is_401() {
    let decision = policy().authorize(&Credentials::Absent, &Capability::ReadAnyAuthenticated);

    assert!(!decision.allowed);
    assert_eq!(decision.http_status, 401);
    assert_eq!(decision.error_kind(), Some(ErrorKind::Unauthenticated));
}

#[test]
fn malformed_token_reason_is_invalid_token() {
    let decision = policy().authorize(
        &Credentials::bearer("not-a-real-token"),
        &Capability::ReadAnyAuthenticated,
    );

    assert!(!decision.allowed);
    assert_eq!(decision.http_status, 401);
    assert_eq!(decision.reason, "invalid token");
}

#[test]
fn provider_outage_never_allows() {
    let mut provider = StaticIdentityProvider::new();
    provider.insert("tok-u1", "u1", None);
    provider.set_unavailable(true);
    let policy = AuthorizationPolicy::new(provider);

    let decision = policy.authorize(
        &Credentials::bearer("tok-u1"),
        &Capability::WriteOwned {
            owner_id: Some("u1".to_string()),
        },
    );

    assert!(!decision.allowed);
    assert_eq!(
        decision.error_kind(),
        Some(ErrorKind::IdentityProviderUnavailable)
    );
    assert_eq!(decision.http_status, 503);
}

#[test]
fn grant_cannot_be_forged() {
    // This test documents that Grant cannot be created from outside the crate.
    // Uncommenting this would fail to compile:
    // let grant = authz_core::Grant { _private: () };
}

#[test]
fn decision_converts_to_result_for_handlers() {
    let denial = policy()
        .authorize(&Credentials::Absent, &Capability::write_self("u1"))
        .into_result()
        .unwrap_err();

    assert_eq!(denial.kind, ErrorKind::Unauthenticated);
    assert_eq!(denial.http_status(), 401);

    let authorized = policy()
        .authorize(&Credentials::bearer("tok-u2"), &Capability::write_self("u2"))
        .into_result()
        .expect("self access");
    assert_eq!(authorized.principal.unwrap().id, "u2");
}
