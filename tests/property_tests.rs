//! Integration property tests for authz-core.
//!
//! These tests validate the spec-level authorization properties across
//! arbitrary inputs using property-based testing.

use authz_core::{
    ApiKey, AuthorizationPolicy, Capability, Credentials, ErrorKind, StaticIdentityProvider,
};
use proptest::prelude::*;

// Strategy: Generate arbitrary principal/owner ids
fn arb_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9-]{1,16}").unwrap()
}

// Strategy: Generate a capability paired with arbitrary targets
fn arb_capability() -> impl Strategy<Value = Capability> {
    prop_oneof![
        Just(Capability::Public),
        Just(Capability::ReadAnyAuthenticated),
        arb_id().prop_map(|id| Capability::ReadSelf { target_id: id }),
        arb_id().prop_map(|id| Capability::WriteSelf { target_id: id }),
        prop::option::of(arb_id()).prop_map(|owner| Capability::WriteOwned { owner_id: owner }),
    ]
}

fn policy_for(user_id: &str) -> AuthorizationPolicy<StaticIdentityProvider> {
    let mut provider = StaticIdentityProvider::new();
    provider.insert("tok", user_id, None);
    AuthorizationPolicy::new(provider).with_api_key(ApiKey::new("configured-secret".to_string()))
}

proptest! {
    /// Property: a matching API key allows everything.
    ///
    /// Regardless of capability or ownership fact, credentials that exactly
    /// match the configured secret produce an allowed decision.
    #[test]
    fn proptest_api_key_match_always_allows(
        user_id in arb_id(),
        capability in arb_capability()
    ) {
        let policy = policy_for(&user_id);
        let decision = policy.authorize(
            &Credentials::api_key("configured-secret"),
            &capability,
        );

        prop_assert!(decision.allowed, "api key should allow {:?}", capability);
        prop_assert!(decision.grant().is_some());
    }

    /// Property: absent credentials deny every non-public capability with 401.
    #[test]
    fn proptest_absent_credentials_deny_non_public(
        user_id in arb_id(),
        capability in arb_capability()
    ) {
        let policy = policy_for(&user_id);
        let decision = policy.authorize(&Credentials::Absent, &capability);

        if capability == Capability::Public {
            prop_assert!(decision.allowed);
        } else {
            prop_assert!(!decision.allowed);
            prop_assert_eq!(decision.http_status, 401);
            prop_assert_eq!(decision.error_kind(), Some(ErrorKind::Unauthenticated));
        }
    }

    /// Property: write-owned allows iff principal id equals owner id exactly.
    #[test]
    fn proptest_write_owned_iff_ids_match(
        principal_id in arb_id(),
        owner_id in arb_id()
    ) {
        let policy = policy_for(&principal_id);
        let decision = policy.authorize(
            &Credentials::bearer("tok"),
            &Capability::WriteOwned { owner_id: Some(owner_id.clone()) },
        );

        if principal_id == owner_id {
            prop_assert!(decision.allowed);
        } else {
            prop_assert!(!decision.allowed);
            prop_assert_eq!(decision.http_status, 403);
            prop_assert_eq!(decision.error_kind(), Some(ErrorKind::Forbidden));
        }
    }

    /// Property: write-self allows iff principal id equals target id exactly.
    #[test]
    fn proptest_write_self_iff_ids_match(
        principal_id in arb_id(),
        target_id in arb_id()
    ) {
        let policy = policy_for(&principal_id);
        let decision = policy.authorize(
            &Credentials::bearer("tok"),
            &Capability::WriteSelf { target_id: target_id.clone() },
        );

        prop_assert_eq!(decision.allowed, principal_id == target_id);
    }

    /// Property: decisions are idempotent given a stable provider.
    #[test]
    fn proptest_decisions_are_idempotent(
        user_id in arb_id(),
        capability in arb_capability(),
        use_bearer in any::<bool>()
    ) {
        let policy = policy_for(&user_id);
        let credentials = if use_bearer {
            Credentials::bearer("tok")
        } else {
            Credentials::Absent
        };

        let first = policy.authorize(&credentials, &capability);
        let second = policy.authorize(&credentials, &capability);

        prop_assert_eq!(first.allowed, second.allowed);
        prop_assert_eq!(first.http_status, second.http_status);
        prop_assert_eq!(&first.reason, &second.reason);
        prop_assert_eq!(first.error_kind(), second.error_kind());
    }

    /// Property: a provider outage is never converted into an allow.
    #[test]
    fn proptest_outage_never_allows(
        user_id in arb_id(),
        capability in arb_capability()
    ) {
        let mut provider = StaticIdentityProvider::new();
        provider.insert("tok", &user_id, None);
        provider.set_unavailable(true);
        let policy = AuthorizationPolicy::new(provider);

        let decision = policy.authorize(&Credentials::bearer("tok"), &capability);

        prop_assert!(!decision.allowed);
        prop_assert_eq!(
            decision.error_kind(),
            Some(ErrorKind::IdentityProviderUnavailable)
        );
    }
}
