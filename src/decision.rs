use crate::error::{Denial, ErrorKind};
use crate::principal::Principal;

/// Proof that an authorization decision allowed the operation.
///
/// A zero-sized token that cannot be constructed outside this crate; the only
/// way to obtain one is from an `allowed = true` decision. Mutating code that
/// takes a `Grant` parameter therefore cannot run before the policy has
/// allowed the request.
#[derive(Debug, Clone, Copy)]
pub struct Grant {
    // Private field prevents construction outside the crate
    _private: (),
}

impl Grant {
    /// Creates a new Grant.
    ///
    /// This is `pub(crate)`; only an allowed decision produces one.
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// The outcome of evaluating one request against the policy.
///
/// A pure value produced once per request and not retained. Denials record
/// the [`ErrorKind`] so callers can remap the suggested HTTP status (for
/// example, surfacing a provider outage as 401 instead of 503) without ever
/// turning a denial into an allow.
#[derive(Debug, Clone)]
pub struct AuthorizationDecision {
    /// Whether the operation may proceed
    pub allowed: bool,
    /// Human-readable explanation of the outcome
    pub reason: String,
    /// Suggested HTTP status: 200 when allowed, otherwise per [`ErrorKind`]
    pub http_status: u16,
    kind: Option<ErrorKind>,
    principal: Option<Principal>,
    grant: Option<Grant>,
}

/// An allowed request: the derived principal (if any) plus the grant proof.
///
/// Obtained from [`AuthorizationDecision::into_result`]; this is what a
/// handler holds while it performs the authorized operation.
#[derive(Debug, Clone)]
pub struct Authorized {
    /// The principal derived for this request. `None` only for anonymous
    /// access to a public capability.
    pub principal: Option<Principal>,
    /// Proof that the policy allowed the operation
    pub grant: Grant,
}

impl AuthorizationDecision {
    /// Allowed decision for an authenticated principal.
    pub(crate) fn allow(principal: Principal) -> Self {
        Self {
            allowed: true,
            reason: "authorized".to_string(),
            http_status: 200,
            kind: None,
            principal: Some(principal),
            grant: Some(Grant::new()),
        }
    }

    /// Allowed decision for anonymous access to a public capability.
    pub(crate) fn allow_anonymous() -> Self {
        Self {
            allowed: true,
            reason: "public".to_string(),
            http_status: 200,
            kind: None,
            principal: None,
            grant: Some(Grant::new()),
        }
    }

    /// Denied decision.
    pub(crate) fn deny(kind: ErrorKind, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            allowed: false,
            http_status: kind.http_status(),
            reason,
            kind: Some(kind),
            principal: None,
            grant: None,
        }
    }

    /// The kind of failure, when denied.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// The principal derived for this request, when one exists.
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// The grant proof, present iff the decision allowed the operation.
    pub fn grant(&self) -> Option<Grant> {
        self.grant
    }

    /// Converts the decision into a `Result` for use with `?` in handlers.
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] carried by a denied decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use authz_core::{
    ///     AuthorizationPolicy, Capability, Credentials, StaticIdentityProvider,
    /// };
    ///
    /// let mut provider = StaticIdentityProvider::new();
    /// provider.insert("tok-u1", "u1", None);
    /// let policy = AuthorizationPolicy::new(provider);
    ///
    /// let authorized = policy
    ///     .authorize(&Credentials::bearer("tok-u1"), &Capability::ReadAnyAuthenticated)
    ///     .into_result()
    ///     .expect("valid token");
    ///
    /// assert_eq!(authorized.principal.unwrap().id, "u1");
    /// ```
    pub fn into_result(self) -> Result<Authorized, Denial> {
        match self.grant {
            Some(grant) => Ok(Authorized {
                principal: self.principal,
                grant,
            }),
            None => Err(Denial::new(
                self.kind.unwrap_or(ErrorKind::Forbidden),
                self.reason,
            )),
        }
    }
}
