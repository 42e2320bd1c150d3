use crate::api_key::ApiKey;
use crate::capability::Capability;
use crate::credentials::Credentials;
use crate::decision::AuthorizationDecision;
use crate::error::ErrorKind;
use crate::principal::{AuthMode, Principal};
use crate::provider::{IdentityProvider, VerificationError};

/// The authorization policy evaluated by every request handler.
///
/// `AuthorizationPolicy` is an explicitly constructed handle holding the
/// identity provider and the optional configured API key. Build it once at
/// process startup and pass it into each request's processing context; there
/// is no lazily built global instance.
///
/// Evaluation is a pure decision table over
/// `(credentials, capability, ownership fact)`: no shared mutable state, no
/// token or session cache, no retry. Two concurrent requests with the same
/// inputs (and a stable provider) get identical decisions.
///
/// # Examples
///
/// ```
/// use authz_core::{
///     ApiKey, AuthorizationPolicy, Capability, Credentials, StaticIdentityProvider,
/// };
///
/// let mut provider = StaticIdentityProvider::new();
/// provider.insert("tok-u1", "u1", Some("u1@example.com"));
///
/// let policy = AuthorizationPolicy::new(provider)
///     .with_api_key(ApiKey::new("secret-key".to_string()));
///
/// // Owner may mutate their own resource
/// let decision = policy.authorize(
///     &Credentials::bearer("tok-u1"),
///     &Capability::WriteOwned { owner_id: Some("u1".to_string()) },
/// );
/// assert!(decision.allowed);
///
/// // Anyone else is forbidden
/// let decision = policy.authorize(
///     &Credentials::bearer("tok-u1"),
///     &Capability::WriteOwned { owner_id: Some("u2".to_string()) },
/// );
/// assert_eq!(decision.http_status, 403);
/// ```
#[derive(Debug)]
pub struct AuthorizationPolicy<P> {
    provider: P,
    api_key: Option<ApiKey>,
}

impl<P: IdentityProvider> AuthorizationPolicy<P> {
    /// Creates a policy with no API-key bypass configured.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            api_key: None,
        }
    }

    /// Configures the static API key granting full bypass access.
    ///
    /// The bypass exists for internal/admin/testing callers and must not be
    /// exposed to end users.
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Decides whether the operation may proceed. First match wins:
    ///
    /// 1. A presented API key matching the configured secret grants full
    ///    access, bypassing capability and ownership checks.
    /// 2. A bearer token is verified by the identity provider; an invalid
    ///    token denies with 401 and a provider outage with 503, before any
    ///    capability is considered.
    /// 3. The capability is evaluated against the verified principal.
    /// 4. No credentials and a non-public capability denies with 401.
    ///
    /// For `WriteOwned`, the caller fetches the resource's ownership fact
    /// from the backing store immediately beforehand and passes it inside the
    /// capability; a missing fact is treated as not-owned.
    pub fn authorize(
        &self,
        credentials: &Credentials,
        capability: &Capability,
    ) -> AuthorizationDecision {
        let principal = match self.authenticate(credentials) {
            Ok(principal) => principal,
            Err(decision) => return decision,
        };

        // API-key callers bypass capability evaluation entirely.
        if let Some(principal) = &principal {
            if principal.auth_mode == AuthMode::ApiKey {
                tracing::debug!("api key accepted, bypassing capability checks");
                return AuthorizationDecision::allow(principal.clone());
            }
        }

        self.evaluate(principal, capability)
    }

    /// Derives the principal from the presented credentials.
    ///
    /// Returns `Ok(None)` for absent credentials; whether that is acceptable
    /// depends on the capability and is decided in `evaluate`.
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<Principal>, AuthorizationDecision> {
        match credentials {
            Credentials::ApiKey(presented) => {
                let matched = self
                    .api_key
                    .as_ref()
                    .is_some_and(|configured| configured.matches(presented));

                if matched {
                    Ok(Some(Principal::service()))
                } else {
                    tracing::warn!("presented api key does not match configured secret");
                    Err(AuthorizationDecision::deny(
                        ErrorKind::Unauthenticated,
                        "invalid api key",
                    ))
                }
            }
            Credentials::Bearer(token) => match self.provider.verify(token) {
                Ok(identity) => Ok(Some(Principal {
                    id: identity.principal_id,
                    email: identity.email,
                    auth_mode: AuthMode::Bearer,
                })),
                Err(VerificationError::InvalidToken) => {
                    tracing::debug!("identity provider rejected bearer token");
                    Err(AuthorizationDecision::deny(
                        ErrorKind::Unauthenticated,
                        "invalid token",
                    ))
                }
                Err(VerificationError::Unavailable(detail)) => {
                    tracing::warn!(%detail, "identity provider unavailable");
                    Err(AuthorizationDecision::deny(
                        ErrorKind::IdentityProviderUnavailable,
                        format!("identity provider unavailable: {}", detail),
                    ))
                }
            },
            Credentials::Absent => Ok(None),
        }
    }

    /// Evaluates the capability against a verified principal (or none).
    fn evaluate(
        &self,
        principal: Option<Principal>,
        capability: &Capability,
    ) -> AuthorizationDecision {
        let principal = match (capability, principal) {
            (Capability::Public, Some(principal)) => {
                return AuthorizationDecision::allow(principal)
            }
            (Capability::Public, None) => return AuthorizationDecision::allow_anonymous(),
            (_, None) => {
                tracing::debug!(?capability, "credentials required but absent");
                return AuthorizationDecision::deny(
                    ErrorKind::Unauthenticated,
                    "authentication required",
                );
            }
            (_, Some(principal)) => principal,
        };

        match capability {
            // Public returned above; repeating the arm keeps the match exhaustive.
            Capability::Public => AuthorizationDecision::allow(principal),
            Capability::ReadAnyAuthenticated => AuthorizationDecision::allow(principal),
            Capability::ReadSelf { target_id } | Capability::WriteSelf { target_id } => {
                // Exact string match; ids are opaque and never case-folded.
                if principal.id == *target_id {
                    AuthorizationDecision::allow(principal)
                } else {
                    tracing::debug!(
                        principal = %principal.id,
                        target = %target_id,
                        "self-only access denied"
                    );
                    AuthorizationDecision::deny(
                        ErrorKind::Forbidden,
                        "resource belongs to another principal",
                    )
                }
            }
            Capability::WriteOwned { owner_id } => match owner_id {
                Some(owner_id) if principal.id == *owner_id => {
                    AuthorizationDecision::allow(principal)
                }
                Some(owner_id) => {
                    tracing::debug!(
                        principal = %principal.id,
                        owner = %owner_id,
                        "ownership check denied"
                    );
                    AuthorizationDecision::deny(ErrorKind::Forbidden, "not the resource owner")
                }
                // Ownership lookup found nothing: treated as not-owned.
                // Surfacing a 404 instead is the caller's choice.
                None => AuthorizationDecision::deny(
                    ErrorKind::Forbidden,
                    "resource ownership unknown",
                ),
            },
        }
    }
}
