//! Uniform authorization-policy evaluation for HTTP request handlers.
//!
//! This crate replaces per-handler copy-pasted credential checks with a single
//! pure decision function. Each request handler derives the caller's
//! [`Credentials`], names the [`Capability`] its operation requires, and asks
//! the [`AuthorizationPolicy`] for an [`AuthorizationDecision`] before doing
//! anything else.
//!
//! # Core Types
//!
//! - [`AuthorizationPolicy`]: dependency-injected policy handle, built once at startup
//! - [`Credentials`]: bearer token, static API key, or absent
//! - [`Capability`]: the access rule an operation requires, with its target
//! - [`AuthorizationDecision`]: pure outcome value with a suggested HTTP status
//! - [`Grant`]: unforgeable proof that a decision allowed the operation
//! - [`IdentityProvider`]: seam to the external bearer-token verifier
//! - [`ApiKey`]: the configured shared secret, redacted in logs/output
//!
//! # Examples
//!
//! ```
//! use authz_core::{
//!     ApiKey, AuthorizationPolicy, Capability, Credentials, StaticIdentityProvider,
//! };
//!
//! let mut provider = StaticIdentityProvider::new();
//! provider.insert("tok-u1", "u1", Some("u1@example.com"));
//!
//! // Built once at process startup, then passed into each handler.
//! let policy = AuthorizationPolicy::new(provider)
//!     .with_api_key(ApiKey::new("secret-key".to_string()));
//!
//! let decision = policy.authorize(
//!     &Credentials::bearer("tok-u1"),
//!     &Capability::WriteOwned { owner_id: Some("u1".to_string()) },
//! );
//! assert!(decision.allowed);
//! ```
//!
//! # What this crate does not do
//!
//! It never queries the resource store (ownership facts are fetched by the
//! caller and passed in), never caches tokens or principals across requests,
//! and never retries the identity provider. Denials and provider outages
//! surface immediately as structured decisions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api_key;
mod capability;
mod credentials;
mod decision;
mod error;
mod policy;
mod principal;
mod provider;
pub mod web;

pub use api_key::ApiKey;
pub use capability::{Capability, ResourceOwnership};
pub use credentials::Credentials;
pub use decision::{Authorized, AuthorizationDecision, Grant};
pub use error::{Denial, ErrorKind};
pub use policy::AuthorizationPolicy;
pub use principal::{AuthMode, Principal, SERVICE_PRINCIPAL_ID};
pub use provider::{
    IdentityProvider, StaticIdentityProvider, VerificationError, VerifiedIdentity,
};
