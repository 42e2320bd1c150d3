/// How the principal's identity was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Identity asserted by a bearer token and verified by the identity provider
    Bearer,
    /// Identity asserted by the configured static API key (trusted internal caller)
    ApiKey,
    /// No credentials presented; only valid for public capabilities
    Anonymous,
}

/// The authenticated actor making a request.
///
/// Derived once per request from the incoming credentials and discarded at the
/// end of the request; never persisted or cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable identifier. For API-key callers this is the well-known
    /// service placeholder, not a real user id.
    pub id: String,
    /// Email reported by the identity provider, if any
    pub email: Option<String>,
    /// How this identity was established
    pub auth_mode: AuthMode,
}

/// Placeholder principal id used for API-key authenticated callers.
pub const SERVICE_PRINCIPAL_ID: &str = "service";

impl Principal {
    /// The elevated service principal assigned to API-key callers.
    ///
    /// Ownership checks never apply to this principal; the API-key bypass
    /// grants full access before any capability is evaluated.
    pub fn service() -> Self {
        Self {
            id: SERVICE_PRINCIPAL_ID.to_string(),
            email: None,
            auth_mode: AuthMode::ApiKey,
        }
    }

}
