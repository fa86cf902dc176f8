//! Reduction of a path list to its distinct swagger base directories.

use std::collections::HashSet;

use super::catalog::match_rule;

/// Returns the swagger base directory of every recognized path, deduplicated
/// in first-seen order.
///
/// Recognition-only rules count here: a path whose layout is recognized but not
/// extractable still contributes its matched directory. Paths no rule matches
/// are dropped.
pub fn normalize<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut bases = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let Some((rule, base)) = match_rule(path) else {
            tracing::trace!(path, "Skipping non-swagger path");
            continue;
        };

        if seen.insert(base.to_string()) {
            tracing::debug!(
                rule = %rule.name,
                recognition_only = rule.is_recognition_only(),
                base,
                "New swagger base directory"
            );
            bases.push(base.to_string());
        }
    }

    bases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_deduplicates_files_in_one_directory() {
        let bases = normalize([
            "specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/addons.json",
            "specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/examples/get.json",
        ]);

        assert_eq!(
            bases,
            vec!["specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/"]
        );
    }

    #[test]
    fn test_normalize_keeps_first_seen_order() {
        let bases = normalize(vec![
            "specification/b/data-plane/B/stable/1.0/b.json".to_string(),
            "README.md".to_string(),
            "specification/a/data-plane/A/stable/1.0/a.json".to_string(),
            "specification/b/data-plane/B/stable/1.0/other.json".to_string(),
        ]);

        assert_eq!(
            bases,
            vec![
                "specification/b/data-plane/B/stable/1.0/",
                "specification/a/data-plane/A/stable/1.0/",
            ]
        );
    }

    #[test]
    fn test_normalize_includes_recognition_only_layouts() {
        let bases = normalize([
            "specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/BatchService.json",
        ]);

        assert_eq!(
            bases,
            vec!["specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/"]
        );
    }

    #[test]
    fn test_normalize_empty_when_nothing_recognized() {
        assert!(normalize(["src/main.rs", "specification/readme.md", ""]).is_empty());
        assert!(normalize(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let paths = [
            "specification/advisor/resource-manager/Microsoft.Advisor/preview/2016-07-12-preview/advisor.json",
            "specification/cognitiveservices/data-plane/LUIS/Runtime/stable/v2.0/LUIS.json",
            "specification/azsadmin/resource-manager/azurebridge/Microsoft.AzureBridge.Admin/preview/2016-01-01/a.json",
        ];

        let once = normalize(paths);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }
}
