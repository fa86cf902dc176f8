//! Rendering of command results.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default).
    #[default]
    Json,
    /// TOON (Token-Oriented Object Notation), a compact tabular form.
    Toon,
}

/// Renders a value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| AppError::Output(e.to_string()))
        }
        OutputFormat::Toon => {
            serde_toon::to_string(value).map_err(|e| AppError::Output(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::{classify_with_rule, normalize, ChangesetReport, ClassifiedPath};

    #[test]
    fn test_render_json() {
        let bases = normalize(["specification/a/data-plane/A/stable/1.0/a.json"]);
        let out = render(&bases, OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["specification/a/data-plane/A/stable/1.0/"]);
    }

    const ADDONS: &str =
        "specification/addons/resource-manager/Microsoft.Addons/preview/2017-05-15/addons.json";

    #[test]
    fn test_render_toon_report_decodes() {
        let report = ChangesetReport::build([ADDONS, "README.md"]);
        let out = render(&report, OutputFormat::Toon).unwrap();

        let decoded: serde_json::Value = serde_toon::from_str(&out).unwrap();
        let paths = decoded["paths"].as_array().unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0]["path"], ADDONS);
        assert_eq!(paths[0]["status"], "descriptor");
        assert_eq!(paths[0]["rp_name"], "Microsoft.Addons");
        assert_eq!(paths[1]["status"], "unrecognized");
        assert_eq!(decoded["rp_versions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_render_toon_classified_paths_decode() {
        let classified: Vec<ClassifiedPath> = [
            ADDONS,
            "specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/BatchService.json",
        ]
        .into_iter()
        .map(|path| ClassifiedPath {
            path: path.to_string(),
            classification: classify_with_rule(path),
        })
        .collect();

        let out = render(&classified, OutputFormat::Toon).unwrap();
        let decoded: Vec<serde_json::Value> = serde_toon::from_str(&out).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0]["rule"], "regular_date");
        assert_eq!(decoded[1]["status"], "unsupported");
        assert_eq!(
            decoded[1]["matched_path"],
            "specification/batch/data-plane/Microsoft.Batch/2017-09-01.6.0/"
        );
    }
}
