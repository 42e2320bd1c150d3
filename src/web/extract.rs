//! Extraction boundary trait for web integration.
//!
//! Defines the core abstraction for deriving authorization inputs from
//! framework-specific request types.

use crate::credentials::Credentials;

/// Derives credentials from a framework-specific request.
///
/// This trait defines the boundary between web framework types and
/// [`Credentials`]. Framework-specific integrations should implement it to
/// pull the bearer token or API key out of their own header types.
///
/// # Design Notes
///
/// This trait intentionally does NOT:
/// - Verify tokens (that's the identity provider's job)
/// - Decide anything (that's `AuthorizationPolicy`'s job)
///
/// It ONLY maps framework types to domain types.
///
/// # Examples
///
/// ```
/// use authz_core::web::ExtractCredentials;
/// use authz_core::Credentials;
///
/// // Example framework-specific implementation
/// struct MyFrameworkRequest {
///     auth_header: Option<String>,
/// }
///
/// impl ExtractCredentials for MyFrameworkRequest {
///     fn extract_credentials(&self) -> Credentials {
///         Credentials::from_authorization_header(self.auth_header.as_deref())
///     }
/// }
/// ```
pub trait ExtractCredentials {
    /// Derives the request's credentials for policy evaluation.
    fn extract_credentials(&self) -> Credentials;
}
