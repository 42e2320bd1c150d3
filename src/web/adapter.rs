//! Request adapter for mapping HTTP requests to authorization inputs.

use std::collections::HashMap;

use crate::credentials::Credentials;

use super::ExtractCredentials;

/// Header carrying bearer credentials.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Header carrying the static API key for trusted internal callers.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Adapter for converting framework-specific HTTP requests into
/// authorization inputs.
///
/// `RequestAdapter` is the primary integration point between web frameworks
/// and this crate. It provides a framework-agnostic interface for:
/// - Deriving [`Credentials`] from request headers
/// - Carrying the request id and routing path parameters handlers need to
///   name their capability targets
///
/// # Design Notes
///
/// This type intentionally contains simple, owned data to avoid coupling
/// to any specific framework's request types. Framework-specific code
/// should implement `From<FrameworkRequest>` for `RequestAdapter`.
///
/// Header names are matched case-insensitively, as HTTP requires.
///
/// # Examples
///
/// ```
/// use authz_core::web::{ExtractCredentials, RequestAdapter};
/// use authz_core::Credentials;
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// adapter.add_header("Authorization".to_string(), "Bearer tok-u1".to_string());
///
/// assert_eq!(adapter.extract_credentials(), Credentials::bearer("tok-u1"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    /// Unique request identifier (required)
    request_id: String,
    /// Request headers, keyed by lowercased name
    headers: HashMap<String, String>,
    /// Path parameters from routing
    path_params: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates a new request adapter with the given request ID.
    ///
    /// All other fields are initialized as empty. Use builder-style methods
    /// to populate them.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            headers: HashMap::new(),
            path_params: HashMap::new(),
        }
    }

    /// Adds a header to the adapter. The name is lowercased on insertion.
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.insert(name.to_ascii_lowercase(), value);
    }

    /// Adds a path parameter to the adapter.
    pub fn add_path_param(&mut self, key: String, value: String) {
        self.path_params.insert(key, value);
    }

    /// Returns a reference to the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Looks up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Looks up a path parameter.
    pub fn path_param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key).map(String::as_str)
    }
}

impl ExtractCredentials for RequestAdapter {
    /// Derives credentials from the request headers.
    ///
    /// The API-key header wins over the `Authorization` header when both are
    /// present, matching the policy's evaluation order where the API-key
    /// bypass is checked first.
    fn extract_credentials(&self) -> Credentials {
        if let Some(key) = self.header(API_KEY_HEADER) {
            if !key.is_empty() {
                return Credentials::api_key(key);
            }
        }

        Credentials::from_authorization_header(self.header(AUTHORIZATION_HEADER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_adapter_new() {
        let adapter = RequestAdapter::new("req-test".to_string());
        assert_eq!(adapter.request_id(), "req-test");
        assert_eq!(adapter.extract_credentials(), Credentials::Absent);
    }

    #[test]
    fn extracts_bearer_from_authorization_header() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_header("Authorization".to_string(), "Bearer tok-abc".to_string());

        assert_eq!(
            adapter.extract_credentials(),
            Credentials::bearer("tok-abc")
        );
    }

    #[test]
    fn extracts_api_key_from_header() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_header("X-Api-Key".to_string(), "secret-key".to_string());

        assert_eq!(
            adapter.extract_credentials(),
            Credentials::api_key("secret-key")
        );
    }

    #[test]
    fn api_key_header_wins_over_authorization() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_header("Authorization".to_string(), "Bearer tok-abc".to_string());
        adapter.add_header("x-api-key".to_string(), "secret-key".to_string());

        assert_eq!(
            adapter.extract_credentials(),
            Credentials::api_key("secret-key")
        );
    }

    #[test]
    fn empty_api_key_header_falls_back_to_bearer() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_header("x-api-key".to_string(), String::new());
        adapter.add_header("authorization".to_string(), "Bearer tok-abc".to_string());

        assert_eq!(
            adapter.extract_credentials(),
            Credentials::bearer("tok-abc")
        );
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_header("AUTHORIZATION".to_string(), "Bearer t".to_string());

        assert_eq!(adapter.header("authorization"), Some("Bearer t"));
        assert_eq!(adapter.header("Authorization"), Some("Bearer t"));
    }

    #[test]
    fn path_params_round_trip() {
        let mut adapter = RequestAdapter::new("req-1".to_string());
        adapter.add_path_param("id".to_string(), "biz-42".to_string());

        assert_eq!(adapter.path_param("id"), Some("biz-42"));
        assert_eq!(adapter.path_param("missing"), None);
    }
}
