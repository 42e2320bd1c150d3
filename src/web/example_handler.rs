//! Example handlers demonstrating web integration with the authorization policy.
//!
//! This module shows realistic request handler flows that run the policy
//! before touching any resource.
//!
//! **These examples are for documentation and testing only.**
//! They demonstrate proper usage patterns without requiring actual HTTP
//! infrastructure.

use std::collections::HashMap;

use crate::capability::{Capability, ResourceOwnership};
use crate::decision::Grant;
use crate::error::Denial;
use crate::policy::AuthorizationPolicy;
use crate::provider::IdentityProvider;

use super::{ExtractCredentials, RequestAdapter};

/// In-memory stand-in for the backing store's ownership lookup.
///
/// Real handlers query the managed database for the resource's `owner_id`
/// immediately before the mutation; this type simulates that lookup so the
/// example flow is testable without a database.
#[derive(Debug, Default)]
pub struct OwnershipStore {
    owners: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl OwnershipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resource with its owner and initial value.
    pub fn insert(&mut self, resource_id: &str, owner_id: &str, value: &str) {
        self.owners
            .insert(resource_id.to_string(), owner_id.to_string());
        self.values
            .insert(resource_id.to_string(), value.to_string());
    }

    /// Fetches the ownership fact for a resource, fresh per request.
    pub fn lookup_owner(&self, resource_id: &str) -> Option<ResourceOwnership> {
        self.owners.get(resource_id).map(|owner_id| ResourceOwnership {
            resource_id: resource_id.to_string(),
            owner_id: owner_id.clone(),
        })
    }

    /// Returns the current value of a resource.
    pub fn value(&self, resource_id: &str) -> Option<&str> {
        self.values.get(resource_id).map(String::as_str)
    }

    /// Mutates a resource. Demands a [`Grant`], so this cannot be called
    /// before the policy has allowed the request.
    pub fn update(&mut self, _grant: Grant, resource_id: &str, value: &str) {
        self.values
            .insert(resource_id.to_string(), value.to_string());
    }
}

/// Result of the public status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResult {
    /// Request ID for tracing
    pub request_id: String,
    /// Whether the caller was authenticated (public endpoints accept both)
    pub authenticated: bool,
}

/// Handles a public status endpoint.
///
/// No credentials are required, but bearer credentials are still verified
/// when presented: a garbage token fails even here.
///
/// # Errors
///
/// Returns a [`Denial`] if presented credentials fail verification.
///
/// # Examples
///
/// ```
/// use authz_core::web::{example_handler::handle_status, RequestAdapter};
/// use authz_core::{AuthorizationPolicy, StaticIdentityProvider};
///
/// let policy = AuthorizationPolicy::new(StaticIdentityProvider::new());
/// let adapter = RequestAdapter::new("req-status-001".to_string());
///
/// let result = handle_status(&policy, &adapter).expect("public endpoint");
/// assert!(!result.authenticated);
/// ```
pub fn handle_status<P: IdentityProvider>(
    policy: &AuthorizationPolicy<P>,
    adapter: &RequestAdapter,
) -> Result<StatusResult, Denial> {
    let credentials = adapter.extract_credentials();

    let authorized = policy
        .authorize(&credentials, &Capability::Public)
        .into_result()?;

    Ok(StatusResult {
        request_id: adapter.request_id().to_string(),
        authenticated: authorized.principal.is_some(),
    })
}

/// Result of a self-profile read.
#[derive(Debug, Clone)]
pub struct ProfileResult {
    /// Request ID for tracing
    pub request_id: String,
    /// The profile owner's id
    pub user_id: String,
    /// Email on the profile, if any
    pub email: Option<String>,
}

/// Handles a `GET /users/:id` style endpoint where the resource IS the caller.
///
/// # Errors
///
/// Returns a [`Denial`] if the caller is unauthenticated, or authenticated as
/// someone other than the requested profile's owner.
///
/// # Examples
///
/// ```
/// use authz_core::web::{example_handler::handle_profile_read, RequestAdapter};
/// use authz_core::{AuthorizationPolicy, StaticIdentityProvider};
///
/// let mut provider = StaticIdentityProvider::new();
/// provider.insert("tok-u1", "u1", Some("u1@example.com"));
/// let policy = AuthorizationPolicy::new(provider);
///
/// let mut adapter = RequestAdapter::new("req-profile-001".to_string());
/// adapter.add_header("authorization".to_string(), "Bearer tok-u1".to_string());
/// adapter.add_path_param("id".to_string(), "u1".to_string());
///
/// let result = handle_profile_read(&policy, &adapter).expect("own profile");
/// assert_eq!(result.user_id, "u1");
/// ```
pub fn handle_profile_read<P: IdentityProvider>(
    policy: &AuthorizationPolicy<P>,
    adapter: &RequestAdapter,
) -> Result<ProfileResult, Denial> {
    let credentials = adapter.extract_credentials();
    let target_id = adapter.path_param("id").unwrap_or_default();

    let authorized = policy
        .authorize(&credentials, &Capability::read_self(target_id))
        .into_result()?;

    // read_self only allows when the principal IS the target, so the
    // principal here is the profile owner (or the API-key service caller).
    let (user_id, email) = match authorized.principal {
        Some(principal) => (principal.id, principal.email),
        None => (String::new(), None),
    };

    Ok(ProfileResult {
        request_id: adapter.request_id().to_string(),
        user_id,
        email,
    })
}

/// Result of an owned-resource mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// Request ID for tracing
    pub request_id: String,
    /// The resource that was updated
    pub resource_id: String,
}

/// Handles a `PUT /businesses/:id` style endpoint with ownership-based access.
///
/// The flow every mutating handler follows:
/// 1. Derive credentials from the request.
/// 2. Fetch the ownership fact fresh from the store.
/// 3. Ask the policy for a decision; stop on denial.
/// 4. Perform the mutation, handing the store the [`Grant`] proof.
///
/// A missing resource denies with 403 (not-owned); callers wanting a 404
/// check for existence separately before invoking the policy.
///
/// # Errors
///
/// Returns a [`Denial`] when the caller is unauthenticated, is not the
/// recorded owner, or the identity provider is unavailable.
///
/// # Examples
///
/// ```
/// use authz_core::web::example_handler::{handle_business_update, OwnershipStore};
/// use authz_core::web::RequestAdapter;
/// use authz_core::{AuthorizationPolicy, StaticIdentityProvider};
///
/// let mut provider = StaticIdentityProvider::new();
/// provider.insert("tok-u1", "u1", None);
/// let policy = AuthorizationPolicy::new(provider);
///
/// let mut store = OwnershipStore::new();
/// store.insert("biz-1", "u1", "Old Name");
///
/// let mut adapter = RequestAdapter::new("req-update-001".to_string());
/// adapter.add_header("authorization".to_string(), "Bearer tok-u1".to_string());
/// adapter.add_path_param("id".to_string(), "biz-1".to_string());
///
/// handle_business_update(&policy, &adapter, &mut store, "New Name")
///     .expect("owner may update");
/// assert_eq!(store.value("biz-1"), Some("New Name"));
/// ```
pub fn handle_business_update<P: IdentityProvider>(
    policy: &AuthorizationPolicy<P>,
    adapter: &RequestAdapter,
    store: &mut OwnershipStore,
    new_value: &str,
) -> Result<UpdateResult, Denial> {
    let credentials = adapter.extract_credentials();
    let resource_id = adapter.path_param("id").unwrap_or_default().to_string();

    // Ownership fact is fetched fresh, immediately before the decision.
    let fact = store.lookup_owner(&resource_id);

    let authorized = policy
        .authorize(&credentials, &Capability::write_owned(fact))
        .into_result()?;

    store.update(authorized.grant, &resource_id, new_value);

    Ok(UpdateResult {
        request_id: adapter.request_id().to_string(),
        resource_id,
    })
}
