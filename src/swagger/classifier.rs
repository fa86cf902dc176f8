//! Classification of a single path into a [`SwaggerDescriptor`].

use regex::Captures;

use super::catalog::{catalog, Extractor, PatternRule, RuleKind, RuleName};
use crate::models::{ReleaseState, ServiceType, SwaggerDescriptor};

/// Outcome of classifying a path, including which rule decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The path matched an extracting rule.
    Descriptor {
        rule: RuleName,
        descriptor: SwaggerDescriptor,
    },
    /// The path matched a recognition-only rule.
    Unsupported { rule: RuleName, matched_path: String },
    /// No rule matched.
    Unrecognized,
}

impl Classification {
    /// Consumes the classification, keeping only a descriptor.
    pub fn into_descriptor(self) -> Option<SwaggerDescriptor> {
        match self {
            Classification::Descriptor { descriptor, .. } => Some(descriptor),
            _ => None,
        }
    }

    /// Short status label: `descriptor`, `unsupported` or `unrecognized`.
    pub fn status(&self) -> &'static str {
        match self {
            Classification::Descriptor { .. } => "descriptor",
            Classification::Unsupported { .. } => "unsupported",
            Classification::Unrecognized => "unrecognized",
        }
    }

    /// Returns the rule that decided this classification, if any.
    pub fn rule(&self) -> Option<RuleName> {
        match self {
            Classification::Descriptor { rule, .. } | Classification::Unsupported { rule, .. } => {
                Some(*rule)
            }
            Classification::Unrecognized => None,
        }
    }
}

/// Classifies a path into swagger metadata.
///
/// Returns `None` when no rule matches, and also when the first matching rule
/// is recognition-only. A broader rule further down the catalog is never consulted
/// once an earlier one has matched.
pub fn classify(path: &str) -> Option<SwaggerDescriptor> {
    classify_with_rule(path).into_descriptor()
}

/// Classifies a path and reports which rule decided the outcome.
pub fn classify_with_rule(path: &str) -> Classification {
    for rule in catalog() {
        let Some(captures) = rule.regex.captures(path) else {
            continue;
        };

        return match rule.kind {
            RuleKind::UnsupportedLayout => {
                tracing::trace!(rule = %rule.name, path, "Recognized unsupported swagger layout");
                Classification::Unsupported {
                    rule: rule.name,
                    matched_path: group(rule, &captures, 0).to_string(),
                }
            }
            RuleKind::Extract(extractor) => match extract(rule, &extractor, &captures) {
                Some(descriptor) => {
                    tracing::trace!(rule = %rule.name, path, "Classified swagger path");
                    Classification::Descriptor {
                        rule: rule.name,
                        descriptor,
                    }
                }
                None => Classification::Unrecognized,
            },
        };
    }

    Classification::Unrecognized
}

/// Returns true if any catalog rule recognizes the path, extracting or not.
pub fn is_swagger_path(path: &str) -> bool {
    catalog().iter().any(|rule| rule.is_match(path))
}

fn extract(
    rule: &PatternRule,
    extractor: &Extractor,
    captures: &Captures<'_>,
) -> Option<SwaggerDescriptor> {
    let service_type_token = group(rule, captures, Extractor::SERVICE_TYPE);
    let release_state_token = group(rule, captures, extractor.release_state);

    let (service_type, release_state) = match (
        service_type_token.parse::<ServiceType>(),
        release_state_token.parse::<ReleaseState>(),
    ) {
        (Ok(service_type), Ok(release_state)) => (service_type, release_state),
        (service_type, release_state) => {
            tracing::debug!(
                rule = %rule.name,
                service_type = ?service_type.err(),
                release_state = ?release_state.err(),
                "Matched path has tokens outside the known enums"
            );
            return None;
        }
    };

    let mut rp_name = group(rule, captures, Extractor::RP_NAME).to_string();
    if let Some(index) = extractor.extra_folder {
        rp_name.push_str(group(rule, captures, index));
    }

    let mut version = group(rule, captures, extractor.version).to_string();
    if let Some(index) = extractor.version_suffix {
        version.push_str(group(rule, captures, index));
    }

    Some(SwaggerDescriptor {
        service_name: group(rule, captures, Extractor::SERVICE_NAME).to_string(),
        service_type,
        rp_name,
        release_state,
        version,
        matched_path: group(rule, captures, 0).to_string(),
    })
}

/// Reads a capture group that the rule's expression always produces on a match.
fn group<'p>(rule: &PatternRule, captures: &Captures<'p>, index: usize) -> &'p str {
    match captures.get(index) {
        Some(m) => m.as_str(),
        None => unreachable!(
            "rule {} matched but capture group {} is missing",
            rule.name, index
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_regular_date() {
        let descriptor = classify(
            "specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/addons.json",
        )
        .unwrap();

        assert_eq!(descriptor.service_name, "addons");
        assert_eq!(descriptor.service_type, ServiceType::ResourceManager);
        assert_eq!(descriptor.rp_name, "Microsoft.Addons");
        assert_eq!(descriptor.release_state, ReleaseState::Preview);
        assert_eq!(descriptor.version, "2017-05-15");
        assert_eq!(
            descriptor.matched_path,
            "specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/"
        );
    }

    #[test]
    fn test_classify_appends_release_state_suffix() {
        let descriptor = classify(
            "specification/advisor/resource-manager/Microsoft.Advisor/preview/2016-07-12-preview/advisor.json",
        )
        .unwrap();

        assert_eq!(descriptor.version, "2016-07-12-preview");
        assert_eq!(descriptor.release_state, ReleaseState::Preview);
    }

    #[test]
    fn test_classify_date_semver() {
        let descriptor = classify(
            "specification/batch/data-plane/Microsoft.Batch/stable/2015-12-01.2.2/BatchService.json",
        )
        .unwrap();

        assert_eq!(descriptor.service_type, ServiceType::DataPlane);
        assert_eq!(descriptor.release_state, ReleaseState::Stable);
        assert_eq!(descriptor.version, "2015-12-01.2.2");
    }

    #[test]
    fn test_classify_semver() {
        let descriptor = classify(
            "specification/servicefabric/data-plane/Microsoft.ServiceFabric/stable/6.3/servicefabric.json",
        )
        .unwrap();

        assert_eq!(descriptor.rp_name, "Microsoft.ServiceFabric");
        assert_eq!(descriptor.version, "6.3");
    }

    #[test]
    fn test_classify_semver_with_extra_folder_concatenates_rp_name() {
        let descriptor = classify(
            "specification/cognitiveservices/data-plane/LUIS/Runtime/stable/v2.0/LUIS-Runtime.json",
        )
        .unwrap();

        assert_eq!(descriptor.service_name, "cognitiveservices");
        assert_eq!(descriptor.rp_name, "LUISRuntime");
        assert_eq!(descriptor.release_state, ReleaseState::Stable);
        assert_eq!(descriptor.version, "v2.0");
    }

    #[test]
    fn test_recognition_only_rules_yield_nothing() {
        let paths = [
            "specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/BatchService.json",
            "specification/azsadmin/resource-manager/commerce/Microsoft.Commerce.Admin/preview/2015-06-01-preview/Commerce.json",
            "specification/azsadmin/resource-manager/azurebridge/Microsoft.AzureBridge.Admin/preview/2016-01-01/AzureBridge.json",
            "specification/cognitiveservices/data-plane/ComputerVision/v1.0/ComputerVision.json",
        ];

        for path in paths {
            assert!(is_swagger_path(path), "{} should be recognized", path);
            assert_eq!(classify(path), None, "{} should not classify", path);
            assert!(matches!(
                classify_with_rule(path),
                Classification::Unsupported { .. }
            ));
        }
    }

    #[test]
    fn test_unsupported_rule_does_not_fall_through() {
        let classification = classify_with_rule(
            "specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/BatchService.json",
        );
        assert_eq!(
            classification.rule(),
            Some(RuleName::DateSemverWithoutReleaseState)
        );
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("README.md"), None);
        assert_eq!(classify("specification/"), None);
        assert_eq!(classify("specification/addons/resource-manager/readme.md"), None);
        assert_eq!(classify_with_rule("src/lib.rs"), Classification::Unrecognized);
        assert_eq!(classify_with_rule("src/lib.rs").status(), "unrecognized");
    }

    #[test]
    fn test_unknown_type_token_is_not_classified() {
        assert_eq!(
            classify("specification/addons/management-plane/Microsoft.Addons/preview/2017-05-15/a.json"),
            None
        );
        assert_eq!(
            classify("specification/addons/resource-manager/Microsoft.Addons/beta/2017-05-15/a.json"),
            None
        );
    }
}
