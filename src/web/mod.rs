//! Web framework integration surface.
//!
//! This module provides the boundary between HTTP frameworks and the
//! authorization policy. It handles:
//! - Mapping HTTP requests to domain types ([`Credentials`](crate::Credentials))
//! - Header parsing for the `Authorization` and API-key headers
//! - Request-ID extraction and propagation
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: This module contains no framework-specific
//!    code. It defines interfaces that framework-specific code can implement.
//!
//! 2. **No Authorization**: The web boundary does not decide anything. It only
//!    derives credentials from headers; the decision belongs to
//!    [`AuthorizationPolicy`](crate::AuthorizationPolicy).
//!
//! 3. **Explicit Context**: No global state. The policy handle flows into
//!    handlers as a parameter.
//!
//! # Integration Model
//!
//! Framework-specific extractors should:
//! 1. Build a [`RequestAdapter`] from framework request types
//! 2. Call `.extract_credentials()` to get `Credentials`
//! 3. Fetch the ownership fact from the backing store when the operation
//!    needs `WriteOwned`
//! 4. Call `AuthorizationPolicy::authorize` before performing any mutation
//!
//! # Example Flow
//!
//! ```ignore
//! // In a framework-specific integration (e.g., axum, actix):
//!
//! // 1. Extract from HTTP request
//! let adapter = RequestAdapter::from_http_request(http_req);
//! let credentials = adapter.extract_credentials();
//!
//! // 2. Fetch the ownership fact (caller's responsibility)
//! let fact = store.lookup_owner(&resource_id);
//!
//! // 3. Decide, then act
//! let authorized = policy
//!     .authorize(&credentials, &Capability::write_owned(fact))
//!     .into_result()?;
//! store.update(authorized.grant, &resource_id, new_value);
//! ```

mod adapter;
pub mod example_handler;
mod extract;

pub use adapter::{RequestAdapter, API_KEY_HEADER, AUTHORIZATION_HEADER};
pub use extract::ExtractCredentials;
