//! Changeset check: does every classifiable path target one API version?
//!
//! A changeset is valid when at least one path classifies and every classified
//! path agrees on the same `(rp_name, version)` pair. Each evaluation starts from
//! scratch; no verdict or baseline is carried between calls.

use serde::Serialize;

use super::catalog::RuleName;
use super::classifier::{classify, classify_with_rule, Classification};
use crate::models::{ReleaseState, RpVersion, ServiceType, SwaggerDescriptor};

/// Why a changeset was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// None of the paths classified to a descriptor.
    NoClassifiableSwagger,
    /// Classified paths disagree on resource provider or version.
    MultipleVersionsOrProviders,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::NoClassifiableSwagger => write!(f, "no classifiable swagger paths"),
            InvalidReason::MultipleVersionsOrProviders => {
                write!(f, "paths span multiple resource providers or versions")
            }
        }
    }
}

/// Outcome of evaluating a changeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(InvalidReason),
}

impl Verdict {
    /// Collapses the verdict to the boolean callers gate on.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(reason) => Some(*reason),
        }
    }
}

/// Evaluates a changeset.
///
/// Stops classifying as soon as a second distinct `(rp_name, version)` pair shows up.
pub fn evaluate<I, S>(paths: I) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut baseline: Option<SwaggerDescriptor> = None;

    for path in paths {
        let Some(descriptor) = classify(path.as_ref()) else {
            continue;
        };

        let Some(first) = &baseline else {
            baseline = Some(descriptor);
            continue;
        };

        if first.rp_name != descriptor.rp_name || first.version != descriptor.version {
            tracing::debug!(
                baseline = %first.rp_version(),
                found = %descriptor.rp_version(),
                "Changeset spans multiple versions"
            );
            return Verdict::Invalid(InvalidReason::MultipleVersionsOrProviders);
        }
    }

    match baseline {
        Some(_) => Verdict::Valid,
        None => Verdict::Invalid(InvalidReason::NoClassifiableSwagger),
    }
}

/// A path of the changeset with its classification.
#[derive(Debug, Clone)]
pub struct ClassifiedPath {
    pub path: String,
    pub classification: Classification,
}

/// Serialized form of a [`ClassifiedPath`].
///
/// Kept flat so list output renders as one uniform table in TOON.
#[derive(Serialize)]
struct PathRow<'a> {
    path: &'a str,
    status: &'static str,
    rule: Option<RuleName>,
    service_name: Option<&'a str>,
    service_type: Option<ServiceType>,
    rp_name: Option<&'a str>,
    release_state: Option<ReleaseState>,
    version: Option<&'a str>,
    matched_path: Option<&'a str>,
}

impl<'a> From<&'a ClassifiedPath> for PathRow<'a> {
    fn from(classified: &'a ClassifiedPath) -> Self {
        let classification = &classified.classification;
        let mut row = PathRow {
            path: &classified.path,
            status: classification.status(),
            rule: classification.rule(),
            service_name: None,
            service_type: None,
            rp_name: None,
            release_state: None,
            version: None,
            matched_path: None,
        };

        match classification {
            Classification::Descriptor { descriptor, .. } => {
                row.service_name = Some(descriptor.service_name.as_str());
                row.service_type = Some(descriptor.service_type);
                row.rp_name = Some(descriptor.rp_name.as_str());
                row.release_state = Some(descriptor.release_state);
                row.version = Some(descriptor.version.as_str());
                row.matched_path = Some(descriptor.matched_path.as_str());
            }
            Classification::Unsupported { matched_path, .. } => {
                row.matched_path = Some(matched_path.as_str());
            }
            Classification::Unrecognized => {}
        }

        row
    }
}

impl Serialize for ClassifiedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        PathRow::from(self).serialize(serializer)
    }
}

/// Full report over a changeset: every path classified, plus the distinct pairs seen.
///
/// Unlike [`evaluate`] this never stops early, so the report lists every pair.
/// The verdict is always the one [`evaluate`] returns for the same paths.
#[derive(Debug, Clone)]
pub struct ChangesetReport {
    pub verdict: Verdict,
    /// Distinct `(rp_name, version)` pairs in first-seen order.
    pub rp_versions: Vec<RpVersion>,
    pub paths: Vec<ClassifiedPath>,
}

impl ChangesetReport {
    /// Classifies every path and derives the verdict.
    pub fn build<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rp_versions: Vec<RpVersion> = Vec::new();
        let mut classified = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let classification = classify_with_rule(path);

            if let Classification::Descriptor { descriptor, .. } = &classification {
                let pair = descriptor.rp_version();
                if !rp_versions.contains(&pair) {
                    rp_versions.push(pair);
                }
            }

            classified.push(ClassifiedPath {
                path: path.to_string(),
                classification,
            });
        }

        let verdict = match rp_versions.len() {
            0 => Verdict::Invalid(InvalidReason::NoClassifiableSwagger),
            1 => Verdict::Valid,
            _ => Verdict::Invalid(InvalidReason::MultipleVersionsOrProviders),
        };

        tracing::debug!(
            paths = classified.len(),
            rp_versions = rp_versions.len(),
            ?verdict,
            "Evaluated changeset"
        );

        Self {
            verdict,
            rp_versions,
            paths: classified,
        }
    }

    /// Number of paths that classified to a descriptor.
    pub fn classified_count(&self) -> usize {
        self.paths
            .iter()
            .filter(|p| matches!(p.classification, Classification::Descriptor { .. }))
            .count()
    }
}

/// Serialized form of a [`ChangesetReport`].
#[derive(Serialize)]
struct ReportView<'a> {
    valid: bool,
    reason: Option<InvalidReason>,
    rp_versions: &'a [RpVersion],
    paths: &'a [ClassifiedPath],
}

impl Serialize for ChangesetReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ReportView {
            valid: self.verdict.is_valid(),
            reason: self.verdict.reason(),
            rp_versions: &self.rp_versions,
            paths: &self.paths,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDONS_2017: &str =
        "specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/addons.json";
    const ADDONS_2017_EXAMPLE: &str =
        "specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/examples/get.json";
    const ADDONS_2018: &str =
        "specification/addons/resource-manager/Microsoft.Addons/preview/2018-01-01/addons.json";
    const ADVISOR: &str =
        "specification/advisor/resource-manager/Microsoft.Advisor/preview/2017-05-15/advisor.json";

    #[test]
    fn test_empty_changeset_is_invalid() {
        assert_eq!(
            evaluate(Vec::<String>::new()),
            Verdict::Invalid(InvalidReason::NoClassifiableSwagger)
        );
    }

    #[test]
    fn test_single_directory_is_valid() {
        let verdict = evaluate([ADDONS_2017, ADDONS_2017_EXAMPLE]);
        assert_eq!(verdict, Verdict::Valid);
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_unclassifiable_paths_are_ignored() {
        assert_eq!(
            evaluate(["README.md", ADDONS_2017, "specification/addons/readme.md"]),
            Verdict::Valid
        );
    }

    #[test]
    fn test_differing_versions_are_invalid_in_any_order() {
        let expected = Verdict::Invalid(InvalidReason::MultipleVersionsOrProviders);
        assert_eq!(evaluate([ADDONS_2017, ADDONS_2018]), expected);
        assert_eq!(evaluate([ADDONS_2018, ADDONS_2017]), expected);
    }

    #[test]
    fn test_differing_providers_are_invalid() {
        let expected = Verdict::Invalid(InvalidReason::MultipleVersionsOrProviders);
        assert_eq!(evaluate([ADVISOR, ADDONS_2017]), expected);
        assert_eq!(evaluate([ADDONS_2017, ADVISOR]), expected);
    }

    #[test]
    fn test_only_recognition_only_paths_is_invalid() {
        assert_eq!(
            evaluate(["specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/BatchService.json"]),
            Verdict::Invalid(InvalidReason::NoClassifiableSwagger)
        );
    }

    #[test]
    fn test_report_lists_every_pair() {
        let report = ChangesetReport::build([ADDONS_2017, ADDONS_2018, ADVISOR, ADDONS_2017]);

        assert_eq!(
            report.verdict,
            Verdict::Invalid(InvalidReason::MultipleVersionsOrProviders)
        );
        assert_eq!(report.rp_versions.len(), 3);
        assert_eq!(report.paths.len(), 4);
        assert_eq!(report.classified_count(), 4);
    }

    #[test]
    fn test_report_verdict_matches_evaluate() {
        let changesets: Vec<Vec<&str>> = vec![
            vec![],
            vec!["README.md"],
            vec![ADDONS_2017],
            vec![ADDONS_2017, "README.md", ADDONS_2017_EXAMPLE],
            vec![ADDONS_2017, ADDONS_2018],
            vec![ADVISOR, "README.md", ADDONS_2017],
        ];

        for paths in changesets {
            assert_eq!(
                ChangesetReport::build(&paths).verdict,
                evaluate(&paths),
                "verdict mismatch for {:?}",
                paths
            );
        }
    }

    #[test]
    fn test_report_serializes_flat_rows() {
        let report = ChangesetReport::build([
            ADDONS_2017,
            "specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/BatchService.json",
            "README.md",
        ]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["valid"], true);
        assert!(json["reason"].is_null());
        assert_eq!(json["rp_versions"][0]["rp_name"], "Microsoft.Addons");

        let paths = json["paths"].as_array().unwrap();
        assert_eq!(paths[0]["status"], "descriptor");
        assert_eq!(paths[0]["rule"], "regular_date");
        assert_eq!(paths[0]["service_type"], "resource-manager");
        assert_eq!(paths[0]["version"], "2017-05-15");
        assert_eq!(paths[1]["status"], "unsupported");
        assert_eq!(
            paths[1]["matched_path"],
            "specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/"
        );
        assert!(paths[1]["rp_name"].is_null());
        assert_eq!(paths[2]["status"], "unrecognized");
        assert!(paths[2]["rule"].is_null());
    }

    #[test]
    fn test_invalid_report_carries_reason() {
        let json = serde_json::to_value(ChangesetReport::build(["README.md"])).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "no_classifiable_swagger");
    }
}
