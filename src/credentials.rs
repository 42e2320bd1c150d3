/// Credentials presented by an incoming request.
///
/// Both token and key are opaque strings: the bearer token is interpreted only
/// by the external identity provider, and the API key only by exact comparison
/// against the configured secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// An `Authorization: Bearer <token>` credential
    Bearer(String),
    /// A static API key presented by a trusted internal caller
    ApiKey(String),
    /// No credentials presented
    Absent,
}

impl Credentials {
    /// Builds bearer credentials from a raw token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(token.into())
    }

    /// Builds API-key credentials from a raw key.
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(key.into())
    }

    /// Parses an `Authorization` header value into credentials.
    ///
    /// Accepts the `Bearer <token>` scheme (case-insensitive scheme name,
    /// as allowed by RFC 7235). Anything else, including an empty token,
    /// yields `Credentials::Absent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use authz_core::Credentials;
    ///
    /// let creds = Credentials::from_authorization_header(Some("Bearer abc.def.ghi"));
    /// assert_eq!(creds, Credentials::bearer("abc.def.ghi"));
    ///
    /// assert_eq!(Credentials::from_authorization_header(None), Credentials::Absent);
    /// assert_eq!(
    ///     Credentials::from_authorization_header(Some("Basic dXNlcg==")),
    ///     Credentials::Absent,
    /// );
    /// ```
    pub fn from_authorization_header(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Credentials::Absent;
        };

        let mut parts = value.trim().splitn(2, ' ');
        let scheme = parts.next().unwrap_or_default();
        let token = parts.next().unwrap_or_default().trim();

        if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
            Credentials::Bearer(token.to_string())
        } else {
            Credentials::Absent
        }
    }
}
