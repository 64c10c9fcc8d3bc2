// VCScout - app/corpus_mgr.rs
//
// Builds the session corpus from the built-in records (embedded in the
// binary) and an optional user-supplied file on disk.
// User records override built-in records with the same id.

use crate::core::corpus;
use crate::core::model::FirmProfile;
use crate::util::constants;
use crate::util::error::CorpusError;
use std::path::Path;

/// Load the full corpus: built-in first, then user-defined overrides.
///
/// A user file that cannot be read or fails validation is skipped as a whole
/// (non-fatal); individual malformed JSON Lines records are skipped one by one.
///
/// Returns the merged corpus and any non-fatal errors encountered.
pub fn load_corpus(user_path: Option<&Path>) -> (Vec<FirmProfile>, Vec<CorpusError>) {
    let mut records = corpus::load_builtin_corpus();
    let mut errors = Vec::new();

    tracing::info!(builtin_count = records.len(), "Loaded built-in corpus");

    if let Some(path) = user_path {
        match load_user_corpus(path) {
            Ok((user_records, line_errors)) => {
                errors.extend(line_errors);
                tracing::info!(
                    path = %path.display(),
                    records = user_records.len(),
                    "Loaded user corpus"
                );
                records = corpus::merge(records, user_records);
            }
            Err(e) => {
                tracing::warn!(error = %e, "User corpus skipped");
                errors.push(e);
            }
        }
    }

    if records.len() > constants::MAX_CORPUS_RECORDS {
        tracing::warn!(
            count = records.len(),
            max = constants::MAX_CORPUS_RECORDS,
            "Too many records loaded, truncating"
        );
        errors.push(CorpusError::TooManyRecords {
            count: records.len(),
            max: constants::MAX_CORPUS_RECORDS,
        });
        records.truncate(constants::MAX_CORPUS_RECORDS);
    }

    tracing::info!(total = records.len(), "Corpus loading complete");

    (records, errors)
}

/// Read, parse, and validate one user corpus file.
fn load_user_corpus(path: &Path) -> Result<(Vec<FirmProfile>, Vec<CorpusError>), CorpusError> {
    let metadata = std::fs::metadata(path).map_err(|e| CorpusError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_CORPUS_FILE_SIZE {
        return Err(CorpusError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CORPUS_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (records, line_errors) = corpus::parse_corpus(&content, path)?;
    corpus::validate_records(&records, path)?;
    Ok((records, line_errors))
}
