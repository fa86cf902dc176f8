//! The ordered catalog of swagger path rules.
//!
//! Each rule recognizes one directory layout seen in specification repositories.
//! Rules overlap, so the catalog order is the precedence order: the first rule
//! whose expression matches a path owns that path, for classification and for
//! normalization alike.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Service type tokens.
const SERVICE_TYPES: &str = "(resource-manager|data-plane|control-plane)";

/// Service type tokens including the legacy `resource-management` spelling.
const SERVICE_TYPES_WITH_LEGACY: &str =
    "(resource-management|resource-manager|data-plane|control-plane)";

const RELEASE_STATE: &str = "(stable|preview)";

const DATE: &str = "([0-9]{4}-[0-9]{2}-[0-9]{2})";

const RELEASE_STATE_SUFFIX: &str = "(-beta|-stable|-preview|-privatepreview)";

/// Names of the catalog rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleName {
    /// `.../Microsoft.Batch/stable/2015-12-01.2.2/`
    DateSemver,
    /// `.../Microsoft.Advisor/preview/2016-07-12-preview/`
    DateWithReleaseStateSuffix,
    /// `.../Microsoft.Addons/preview/2017-05-15/`
    RegularDate,
    /// `.../Microsoft.Batch/2017-09-01.6.0/`
    DateSemverWithoutReleaseState,
    /// `.../commerce/Microsoft.Commerce.Admin/preview/2015-06-01-preview/`
    DateWithReleaseStateSuffixAndExtraFolder,
    /// `.../azurebridge/Microsoft.AzureBridge.Admin/preview/2016-01-01/`
    RegularDateAndExtraFolder,
    /// `.../Microsoft.ServiceFabric/stable/6.3/`
    Semver,
    /// `.../ComputerVision/v1.0/`
    SemverWithoutReleaseState,
    /// `.../LUIS/Runtime/stable/v2.0/`
    SemverWithExtraFolder,
}

impl RuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::DateSemver => "date_semver",
            RuleName::DateWithReleaseStateSuffix => "date_with_release_state_suffix",
            RuleName::RegularDate => "regular_date",
            RuleName::DateSemverWithoutReleaseState => "date_semver_without_release_state",
            RuleName::DateWithReleaseStateSuffixAndExtraFolder => {
                "date_with_release_state_suffix_and_extra_folder"
            }
            RuleName::RegularDateAndExtraFolder => "regular_date_and_extra_folder",
            RuleName::Semver => "semver",
            RuleName::SemverWithoutReleaseState => "semver_without_release_state",
            RuleName::SemverWithExtraFolder => "semver_with_extra_folder",
        }
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capture group positions an extracting rule reads its fields from.
///
/// Group 1 is always the service name, group 2 the service type and group 3
/// the resource provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extractor {
    /// Extra nested folder appended to the resource provider.
    pub extra_folder: Option<usize>,
    pub release_state: usize,
    pub version: usize,
    /// Release-state suffix appended to the version (e.g. `-preview`).
    pub version_suffix: Option<usize>,
}

impl Extractor {
    pub const SERVICE_NAME: usize = 1;
    pub const SERVICE_TYPE: usize = 2;
    pub const RP_NAME: usize = 3;
}

/// What a rule does with a path it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Extract a descriptor from the capture groups.
    Extract(Extractor),
    /// The layout is recognized as a swagger path but no descriptor is produced.
    UnsupportedLayout,
}

/// A named path rule.
#[derive(Debug)]
pub struct PatternRule {
    pub name: RuleName,
    pub regex: Regex,
    pub kind: RuleKind,
}

impl PatternRule {
    fn new(name: RuleName, pattern: &str, kind: RuleKind) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for rule {}: {}", name, e));
        Self { name, regex, kind }
    }

    /// Returns true if the rule's expression matches anywhere in the path.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns the full substring matched by the rule's expression.
    pub fn find<'p>(&self, path: &'p str) -> Option<&'p str> {
        self.regex.find(path).map(|m| m.as_str())
    }

    /// Returns true if the rule recognizes paths without extracting from them.
    pub fn is_recognition_only(&self) -> bool {
        matches!(self.kind, RuleKind::UnsupportedLayout)
    }
}

/// `specification/<service>/<type>/<rp>/` followed by `tail`.
fn rule_pattern(service_types: &str, tail: &str) -> String {
    format!("specification/([^/]*)/{}/([^/]*)/{}/", service_types, tail)
}

static CATALOG: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    use RuleKind::{Extract, UnsupportedLayout};

    vec![
        PatternRule::new(
            RuleName::DateSemver,
            &rule_pattern(
                SERVICE_TYPES,
                &format!("{}/([0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}}[0-9.]+)", RELEASE_STATE),
            ),
            Extract(Extractor {
                extra_folder: None,
                release_state: 4,
                version: 5,
                version_suffix: None,
            }),
        ),
        PatternRule::new(
            RuleName::DateWithReleaseStateSuffix,
            &rule_pattern(
                SERVICE_TYPES,
                &format!("{}/{}{}", RELEASE_STATE, DATE, RELEASE_STATE_SUFFIX),
            ),
            Extract(Extractor {
                extra_folder: None,
                release_state: 4,
                version: 5,
                version_suffix: Some(6),
            }),
        ),
        PatternRule::new(
            RuleName::RegularDate,
            &rule_pattern(SERVICE_TYPES, &format!("{}/{}", RELEASE_STATE, DATE)),
            Extract(Extractor {
                extra_folder: None,
                release_state: 4,
                version: 5,
                version_suffix: None,
            }),
        ),
        PatternRule::new(
            RuleName::DateSemverWithoutReleaseState,
            &rule_pattern(SERVICE_TYPES, "([0-9.-]+)"),
            UnsupportedLayout,
        ),
        PatternRule::new(
            RuleName::DateWithReleaseStateSuffixAndExtraFolder,
            &rule_pattern(
                SERVICE_TYPES,
                &format!("([^/]*)/{}/{}{}", RELEASE_STATE, DATE, RELEASE_STATE_SUFFIX),
            ),
            UnsupportedLayout,
        ),
        PatternRule::new(
            RuleName::RegularDateAndExtraFolder,
            &rule_pattern(SERVICE_TYPES, &format!("([^/]*)/{}/{}", RELEASE_STATE, DATE)),
            UnsupportedLayout,
        ),
        PatternRule::new(
            RuleName::Semver,
            &rule_pattern(SERVICE_TYPES, &format!("{}/([0-9.vV]+)", RELEASE_STATE)),
            Extract(Extractor {
                extra_folder: None,
                release_state: 4,
                version: 5,
                version_suffix: None,
            }),
        ),
        PatternRule::new(
            RuleName::SemverWithoutReleaseState,
            &rule_pattern(SERVICE_TYPES_WITH_LEGACY, "([0-9.v])*"),
            UnsupportedLayout,
        ),
        PatternRule::new(
            RuleName::SemverWithExtraFolder,
            &rule_pattern(SERVICE_TYPES, &format!("([^/]*)/{}/([0-9.vV]+)", RELEASE_STATE)),
            Extract(Extractor {
                extra_folder: Some(4),
                release_state: 5,
                version: 6,
                version_suffix: None,
            }),
        ),
    ]
});

/// Returns the catalog rules in precedence order.
pub fn catalog() -> &'static [PatternRule] {
    &CATALOG
}

/// Finds the first rule matching the path, with the substring it matched.
pub fn match_rule(path: &str) -> Option<(&'static PatternRule, &str)> {
    catalog()
        .iter()
        .find_map(|rule| rule.find(path).map(|matched| (rule, matched)))
}
