// VCScout - core/corpus.rs
//
// Firm-profile corpus parsing, validation, and merging.
// Built-in records are embedded at compile time; user files are read by
// app::corpus_mgr and handed to the functions here as strings.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::FirmProfile;
use crate::util::error::CorpusError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Built-in corpus source, embedded in the binary.
pub fn builtin_corpus_source() -> &'static str {
    include_str!("../../data/firms.json")
}

/// Parse a corpus document into records.
///
/// Accepts either a JSON array of records or JSON Lines. For JSON Lines,
/// objects that carry neither `firmName` nor `industryFocus` belong to other
/// datasets and are skipped silently; objects that look like firm records but
/// fail to parse are skipped and reported as non-fatal errors.
pub fn parse_corpus(
    content: &str,
    path: &Path,
) -> Result<(Vec<FirmProfile>, Vec<CorpusError>), CorpusError> {
    if content.trim_start().starts_with('[') {
        let records: Vec<FirmProfile> =
            serde_json::from_str(content).map_err(|e| CorpusError::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok((records, Vec::new()))
    } else {
        Ok(parse_json_lines(content, path))
    }
}

fn parse_json_lines(content: &str, path: &Path) -> (Vec<FirmProfile>, Vec<CorpusError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = idx + 1;

        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                errors.push(CorpusError::LineParse {
                    path: path.to_path_buf(),
                    line_number,
                    source: e,
                });
                continue;
            }
        };

        let is_firm = value.get("firmName").is_some() || value.get("industryFocus").is_some();
        if !is_firm {
            tracing::trace!(line = line_number, "Skipping non-firm record");
            continue;
        }

        match serde_json::from_value::<FirmProfile>(value) {
            Ok(record) => records.push(record),
            Err(e) => errors.push(CorpusError::LineParse {
                path: path.to_path_buf(),
                line_number,
                source: e,
            }),
        }
    }

    (records, errors)
}

/// Check required fields and id uniqueness within one source.
pub fn validate_records(records: &[FirmProfile], path: &Path) -> Result<(), CorpusError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());

    for record in records {
        if record.id.trim().is_empty() {
            return Err(CorpusError::MissingField {
                record_id: record.firm_name.clone(),
                field: "id",
            });
        }
        if record.firm_name.trim().is_empty() {
            return Err(CorpusError::MissingField {
                record_id: record.id.clone(),
                field: "firmName",
            });
        }
        if record.email.trim().is_empty() {
            return Err(CorpusError::MissingField {
                record_id: record.id.clone(),
                field: "email",
            });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CorpusError::DuplicateId {
                id: record.id.clone(),
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Load the embedded corpus.
///
/// A failure here is a packaging bug; it is logged and an empty corpus is
/// returned so the application still starts.
pub fn load_builtin_corpus() -> Vec<FirmProfile> {
    let path = PathBuf::from("<builtin>/firms.json");
    let parsed = parse_corpus(builtin_corpus_source(), &path)
        .and_then(|(records, _)| validate_records(&records, &path).map(|()| records));

    match parsed {
        Ok(records) => {
            tracing::debug!(records = records.len(), "Loaded built-in corpus");
            records
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load built-in corpus");
            Vec::new()
        }
    }
}

/// Merge `overrides` into `base`.
///
/// A record whose id already exists replaces the base record in place, so the
/// corpus order stays stable; unseen ids are appended in `overrides` order.
pub fn merge(mut base: Vec<FirmProfile>, overrides: Vec<FirmProfile>) -> Vec<FirmProfile> {
    for record in overrides {
        if let Some(pos) = base.iter().position(|p| p.id == record.id) {
            tracing::info!(record_id = %record.id, "User record overrides built-in");
            base[pos] = record;
        } else {
            base.push(record);
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ContactPerson;

    fn record(id: &str, firm: &str) -> FirmProfile {
        FirmProfile {
            id: id.to_string(),
            firm_name: firm.to_string(),
            industry_focus: "SaaS".to_string(),
            sectors: vec![],
            contact_person: ContactPerson {
                name: "Ada".to_string(),
                designation: "GP".to_string(),
                bio: None,
            },
            email: "ada@example.vc".to_string(),
            website_url: None,
            linkedin_url: None,
            logo_url: None,
            location: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_builtin_corpus_loads_ten_records() {
        let corpus = load_builtin_corpus();
        assert_eq!(corpus.len(), 10);
        assert_eq!(corpus[0].firm_name, "Andreessen Horowitz");
        assert_eq!(corpus[9].industry_focus, "CleanTech");
    }

    #[test]
    fn test_json_lines_skips_non_firm_and_reports_bad_lines() {
        let content = concat!(
            r#"{"question":"What is a term sheet?","answer":"..."}"#,
            "\n",
            r#"{"id":"a","firmName":"Alpha","industryFocus":"SaaS","contactPerson":{"name":"A","designation":"GP"},"email":"a@a.vc"}"#,
            "\n\n",
            r#"{"id":"b","firmName":"Beta"}"#,
            "\n",
            "not json\n",
        );
        let (records, errors) = parse_corpus(content, Path::new("data.jsonl")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "a");
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            CorpusError::LineParse { line_number: 4, .. }
        ));
    }

    #[test]
    fn test_malformed_array_is_fatal() {
        let result = parse_corpus("[{\"id\": 1}", Path::new("bad.json"));
        assert!(matches!(result, Err(CorpusError::JsonParse { .. })));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let records = vec![record("1", "One"), record("1", "Uno")];
        let result = validate_records(&records, Path::new("dup.json"));
        match result {
            Err(CorpusError::DuplicateId { id, .. }) => assert_eq!(id, "1"),
            other => panic!("Expected DuplicateId, got: {other:?}"),
        }
    }

    #[test]
    fn test_empty_firm_name_rejected() {
        let records = vec![record("1", "  ")];
        match validate_records(&records, Path::new("x.json")) {
            Err(CorpusError::MissingField { field, .. }) => assert_eq!(field, "firmName"),
            other => panic!("Expected MissingField, got: {other:?}"),
        }
    }

    #[test]
    fn test_merge_replaces_in_place_and_appends_new() {
        let base = vec![record("1", "One"), record("2", "Two")];
        let merged = merge(base, vec![record("3", "Three"), record("1", "Uno")]);
        let names: Vec<_> = merged.iter().map(|p| p.firm_name.as_str()).collect();
        assert_eq!(names, vec!["Uno", "Two", "Three"]);
    }
}
