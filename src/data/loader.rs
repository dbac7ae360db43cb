// ============================================================
// Layer 2 — Corpus Loader
// ============================================================
// Turns one split of the dataset into the raw corpus: the
// ordered list of full-function source strings.
//
// CodeSearchNet records carry many columns (docstrings, token
// lists, URLs, ...); the vocabulary pipeline consumes exactly
// one of them, `whole_func_string`. This step extracts that
// column and nothing else, preserving the dataset's native
// record order.
//
// The dataset repository stays behind the DatasetSource trait,
// so this function is testable with an in-memory fake and the
// Hub-backed source is swappable for a local mirror.
//
// Reference: Rust Book §10 (Traits), §13 (Iterators)

use anyhow::Result;

use crate::domain::record::Partition;
use crate::domain::traits::DatasetSource;

/// Default language of the corpus — CodeSearchNet covers six,
/// but downstream tokenization only supports this one.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Fetch one split and return the `whole_func_string` column of
/// every record, in the source's record order.
///
/// Any failure from the source (unknown language, unknown
/// partition, decode error) propagates unchanged — no retries,
/// no partial results.
pub fn get_code(
    source: &impl DatasetSource,
    partition: Partition,
    language: &str,
) -> Result<Vec<String>> {
    let records = source.load_split(language, partition)?;

    let corpus: Vec<String> = records
        .into_iter()
        .map(|record| record.whole_func_string)
        .collect();

    tracing::info!(
        partition = %partition,
        language,
        documents = corpus.len(),
        "extracted raw corpus"
    );

    Ok(corpus)
}

/// `get_code` with the default language.
pub fn get_python_code(source: &impl DatasetSource, partition: Partition) -> Result<Vec<String>> {
    get_code(source, partition, DEFAULT_LANGUAGE)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// An in-memory fake stands in for the Hub so these tests need
// no network. The fake also lets us check error propagation.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::CodeRecord;
    use anyhow::bail;

    /// Serves a fixed record list for the python train split
    /// and fails for everything else, like a real lookup would.
    struct FakeSource {
        records: Vec<CodeRecord>,
    }

    impl DatasetSource for FakeSource {
        fn load_split(&self, language: &str, partition: Partition) -> Result<Vec<CodeRecord>> {
            if language != "python" || partition != Partition::Train {
                bail!("no '{language}' {partition} split");
            }
            Ok(self.records.clone())
        }
    }

    fn fake() -> FakeSource {
        FakeSource {
            records: vec![
                CodeRecord::new("def a():\n    return 1"),
                CodeRecord::new("def b():\n    return 2"),
                CodeRecord::new("def c():\n    return 3"),
            ],
        }
    }

    #[test]
    fn test_extracts_function_column_in_record_order() {
        let corpus = get_code(&fake(), Partition::Train, "python").unwrap();
        assert_eq!(corpus.len(), 3);
        assert!(corpus[0].starts_with("def a"));
        assert!(corpus[1].starts_with("def b"));
        assert!(corpus[2].starts_with("def c"));
    }

    #[test]
    fn test_default_language_is_python() {
        let corpus = get_python_code(&fake(), Partition::Train).unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_source_errors_propagate() {
        // Unknown language and unknown partition both surface
        // the source's own error, unhandled
        assert!(get_code(&fake(), Partition::Train, "go").is_err());
        assert!(get_python_code(&fake(), Partition::Test).is_err());
    }

    #[test]
    fn test_empty_split_yields_empty_corpus() {
        let source = FakeSource { records: vec![] };
        let corpus = get_code(&source, Partition::Train, "python").unwrap();
        assert!(corpus.is_empty());
    }
}
