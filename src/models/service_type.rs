//! Service type enum representing the API surface category of a swagger.

use std::str::FromStr;

use serde::Serialize;

/// API surface category, taken from the directory token that follows the
/// service folder (`specification/<service>/<type>/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Management APIs (`resource-manager`).
    ResourceManager,
    /// `control-plane`.
    ControlPlane,
    /// `data-plane`.
    DataPlane,
}

impl ServiceType {
    /// Returns the directory token for this service type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::ResourceManager => "resource-manager",
            ServiceType::ControlPlane => "control-plane",
            ServiceType::DataPlane => "data-plane",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    /// Parses a directory token, lower-casing it first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resource-manager" => Ok(ServiceType::ResourceManager),
            "control-plane" => Ok(ServiceType::ControlPlane),
            "data-plane" => Ok(ServiceType::DataPlane),
            _ => Err(format!(
                "Invalid service type '{}'. Valid values: resource-manager, control-plane, data-plane",
                s
            )),
        }
    }
}
