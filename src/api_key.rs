use std::fmt;

/// The configured shared-secret API key.
///
/// `ApiKey` holds the one static secret that grants elevated bypass access to
/// trusted internal callers. The wrapped value cannot be read back out; the
/// only operation is an exact-match comparison against a presented key.
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - No accessor returns the secret value
///
/// # Examples
///
/// ```
/// use authz_core::ApiKey;
///
/// let key = ApiKey::new("secret-key".to_string());
///
/// // Safe: the key is redacted in all output
/// assert_eq!(format!("{:?}", key), "[REDACTED]");
///
/// assert!(key.matches("secret-key"));
/// assert!(!key.matches("Secret-Key")); // exact match, case-sensitive
/// ```
// BREAKING CHANGE WARNING: Do NOT add Clone, Copy, or Default derives.
// These would allow the shared secret to be duplicated carelessly.
pub struct ApiKey {
    // BREAKING CHANGE WARNING: This field MUST remain private.
    // Making it public exposes the secret directly (CWE-532).
    secret: String,
}

impl ApiKey {
    /// Wraps the configured secret.
    ///
    /// Call this once at process startup with the secret from configuration,
    /// then hand the key to `AuthorizationPolicy`.
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Compares a presented key against the configured secret.
    ///
    /// The comparison is byte-exact: no trimming, no case folding. An empty
    /// configured secret never matches anything.
    pub fn matches(&self, presented: &str) -> bool {
        !self.secret.is_empty() && self.secret.as_bytes() == presented.as_bytes()
    }
}

// BREAKING CHANGE WARNING: Do NOT implement Deref, AsRef, Borrow, or any other
// trait that would expose the secret implicitly. The only access is matches().

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
