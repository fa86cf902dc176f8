//! Release state enum representing the maturity of an API version.

use std::str::FromStr;

use serde::Serialize;

/// Maturity marker of a swagger version directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseState {
    Preview,
    Stable,
}

impl ReleaseState {
    /// Returns the directory token for this release state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseState::Preview => "preview",
            ReleaseState::Stable => "stable",
        }
    }
}

impl std::fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preview" => Ok(ReleaseState::Preview),
            "stable" => Ok(ReleaseState::Stable),
            _ => Err(format!(
                "Invalid release state '{}'. Valid values: preview, stable",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_state() {
        assert_eq!("preview".parse::<ReleaseState>().unwrap(), ReleaseState::Preview);
        assert_eq!("Stable".parse::<ReleaseState>().unwrap(), ReleaseState::Stable);
        assert!("beta".parse::<ReleaseState>().is_err());
    }
}
