// ============================================================
// Layer 3 — Vocabulary Builder
// ============================================================
// Assigns every distinct token in a tokenized corpus a dense
// integer id and returns both lookup directions.
//
// Determinism matters here: the same corpus must always yield
// the same mapping, no matter how documents are ordered or how
// often tokens repeat. Collecting into a BTreeSet gives us
// dedup and lexicographic order in one step, and ids are then
// just enumeration positions.
//
// Invariants:
//   - token2id is a bijection onto [0, distinct_count)
//   - id2token is its exact inverse
//   - no gaps, no collisions
//
// There is no incremental update — a changed corpus means a
// full rebuild, which at this scale is a set-and-sort pass.
//
// Reference: Rust Book §8 (Collections)

use std::collections::{BTreeSet, HashMap};

/// Build the forward (token→id) and inverse (id→token) lookup
/// maps over every distinct token in the corpus.
///
/// Ids are dense from 0 in ascending lexicographic order of
/// the token text. The empty corpus yields two empty maps.
/// Cannot fail on any well-formed input, hence no Result.
pub fn create_vocab(
    tokenized_corpus: &[Vec<String>],
) -> (HashMap<String, usize>, HashMap<usize, String>) {
    let unique_tokens: BTreeSet<&str> = tokenized_corpus
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    let mut token2id = HashMap::with_capacity(unique_tokens.len());
    let mut id2token = HashMap::with_capacity(unique_tokens.len());

    for (id, token) in unique_tokens.into_iter().enumerate() {
        token2id.insert(token.to_string(), id);
        id2token.insert(id, token.to_string());
    }

    tracing::info!(
        documents = tokenized_corpus.len(),
        vocab_size = token2id.len(),
        "built vocabulary"
    );

    (token2id, id2token)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&[&str]]) -> Vec<Vec<String>> {
        docs.iter()
            .map(|d| d.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_ids_follow_lexicographic_order() {
        let (token2id, id2token) = create_vocab(&corpus(&[&["a", "b"], &["b", "c"]]));

        assert_eq!(token2id["a"], 0);
        assert_eq!(token2id["b"], 1);
        assert_eq!(token2id["c"], 2);
        assert_eq!(id2token[&0], "a");
        assert_eq!(id2token[&1], "b");
        assert_eq!(id2token[&2], "c");
    }

    #[test]
    fn test_mappings_are_exact_inverses() {
        let (token2id, id2token) =
            create_vocab(&corpus(&[&["def", "f", "(", ")", ":"], &["return", "f"]]));

        assert_eq!(token2id.len(), id2token.len());
        for (token, id) in &token2id {
            assert_eq!(&id2token[id], token);
        }
    }

    #[test]
    fn test_id_range_is_dense_from_zero() {
        let (token2id, _) = create_vocab(&corpus(&[&["x", "y", "z", "x", "x"]]));

        let mut ids: Vec<usize> = token2id.values().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_deterministic_under_reordering_and_duplication() {
        let base = create_vocab(&corpus(&[&["a", "b"], &["b", "c"]]));
        let reordered = create_vocab(&corpus(&[&["b", "c"], &["a", "b"]]));
        let duplicated = create_vocab(&corpus(&[&["a", "b"], &["b", "c"], &["a", "b"]]));

        assert_eq!(base.0, reordered.0);
        assert_eq!(base.0, duplicated.0);
    }

    #[test]
    fn test_empty_corpus_and_empty_documents() {
        let (token2id, id2token) = create_vocab(&[]);
        assert!(token2id.is_empty());
        assert!(id2token.is_empty());

        let (token2id, id2token) = create_vocab(&corpus(&[&[], &[]]));
        assert!(token2id.is_empty());
        assert!(id2token.is_empty());
    }

    #[test]
    fn test_empty_string_is_a_valid_token() {
        // The tokenizer's end-of-file marker is the empty
        // string; it sorts first and gets id 0
        let (token2id, _) = create_vocab(&corpus(&[&["def", ""]]));
        assert_eq!(token2id[""], 0);
        assert_eq!(token2id["def"], 1);
    }
}
