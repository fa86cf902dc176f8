//! Structured metadata extracted from a swagger path.

use serde::Serialize;

use super::{ReleaseState, ServiceType};

/// Metadata describing one swagger version directory.
///
/// Produced by the classifier from a single path and never mutated afterwards.
/// `matched_path` is the literal prefix that the matching rule consumed, i.e.
/// the swagger base directory the file lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwaggerDescriptor {
    /// Top-level service folder name (e.g., "addons").
    pub service_name: String,
    /// API surface category.
    pub service_type: ServiceType,
    /// Resource-provider folder, with any extra nested folder appended.
    pub rp_name: String,
    /// Maturity of the version.
    pub release_state: ReleaseState,
    /// Version token as captured, including any release-state suffix.
    pub version: String,
    /// The matched swagger base directory.
    pub matched_path: String,
}

impl SwaggerDescriptor {
    /// The `(rp_name, version)` pair a changeset must agree on.
    pub fn rp_version(&self) -> RpVersion {
        RpVersion {
            rp_name: self.rp_name.clone(),
            version: self.version.clone(),
        }
    }
}

/// A resource-provider / version pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RpVersion {
    pub rp_name: String,
    pub version: String,
}

impl std::fmt::Display for RpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.rp_name, self.version)
    }
}
