/// The access level a handler requires for the operation it is about to run.
///
/// Each variant carries the target it is checked against, so a capability
/// cannot be paired with the wrong kind of target. Handlers that need
/// `WriteOwned` fetch the ownership fact from the backing store first and
/// pass it in; this crate never queries the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// No authentication required
    Public,
    /// Any successfully authenticated caller may proceed
    ReadAnyAuthenticated,
    /// The resource IS the principal (e.g. reading one's own profile)
    ReadSelf {
        /// Identifier of the resource being read, compared to the principal id
        target_id: String,
    },
    /// The resource IS the principal (e.g. updating one's own profile)
    WriteSelf {
        /// Identifier of the resource being written, compared to the principal id
        target_id: String,
    },
    /// Mutation of a resource with a recorded owner
    WriteOwned {
        /// Owner id of the target resource, fetched fresh from the backing
        /// store by the caller. `None` means the ownership lookup returned
        /// nothing; the policy treats that as not-owned and denies with 403,
        /// leaving any 404 response to the caller.
        owner_id: Option<String>,
    },
}

impl Capability {
    /// Builds a `ReadSelf` capability for the given target resource id.
    pub fn read_self(target_id: impl Into<String>) -> Self {
        Capability::ReadSelf {
            target_id: target_id.into(),
        }
    }

    /// Builds a `WriteSelf` capability for the given target resource id.
    pub fn write_self(target_id: impl Into<String>) -> Self {
        Capability::WriteSelf {
            target_id: target_id.into(),
        }
    }

    /// Builds a `WriteOwned` capability from an ownership lookup result.
    pub fn write_owned(fact: Option<ResourceOwnership>) -> Self {
        Capability::WriteOwned {
            owner_id: fact.map(|f| f.owner_id),
        }
    }
}

/// An ownership fact pair fetched from the backing store.
///
/// Fetched fresh per request, immediately before the mutation is attempted,
/// to avoid staleness. Never cached by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOwnership {
    /// Identifier of the resource
    pub resource_id: String,
    /// Identity recorded as the resource's owner
    pub owner_id: String,
}
