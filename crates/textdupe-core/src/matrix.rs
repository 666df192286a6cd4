//! Pairwise comparison matrix.
//!
//! Enumerates every unordered pair of input files exactly once (nested
//! index ranges, i < j), computes the edit distance for each pair, and
//! collects the results keyed by canonical pair identity. Pairs are
//! independent of each other, so the sweep is partitioned across rayon
//! workers; each unordered pair is owned by exactly one worker, so
//! inserts into the shared map never race on the same key.

use crate::distance::levenshtein;
use crate::normalize::strip_ignorable;
use crate::progress::ProgressReporter;
use ahash::AHashMap;
use dashmap::DashMap;
use rayon::prelude::*;
use std::borrow::Cow;

/// One input file: its identifier (path string, unique within a run)
/// and its raw bytes.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: String,
    pub content: Vec<u8>,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// Canonical unordered pair of file identifiers: the lexicographically
/// smaller path always comes first, so (A,B) and (B,A) resolve to the
/// same key. Never holds the same identifier on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Build the canonical key for two distinct identifiers.
    ///
    /// Panics if `a == b`: a pair never compares a file to itself, and
    /// an equal-sided key would corrupt the result map.
    pub fn new(a: &str, b: &str) -> Self {
        assert_ne!(a, b, "a pair never compares a file to itself");
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// The pair string used for rendering and tie-breaking. Built from
    /// the canonical ordering, so it is stable no matter which worker
    /// computed the pair first.
    pub fn render(&self) -> String {
        format!("{}|{}", self.first, self.second)
    }
}

/// Distances for every unordered pair of distinct inputs: exactly
/// n·(n−1)/2 entries for n files, symmetric by construction since each
/// pair is computed once.
#[derive(Debug, Default)]
pub struct ComparisonResult {
    distances: AHashMap<PairKey, usize>,
}

impl ComparisonResult {
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn get(&self, key: &PairKey) -> Option<usize> {
        self.distances.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, usize)> {
        self.distances.iter().map(|(key, &distance)| (key, distance))
    }
}

/// Compare every unordered pair of records and collect the distances.
///
/// When `strip_whitespace` is set, each record's content is normalized
/// once up front; both operands of every pair see the same transform,
/// so distances stay symmetric.
pub fn compare_all(
    records: &[FileRecord],
    strip_whitespace: bool,
    reporter: &dyn ProgressReporter,
) -> ComparisonResult {
    let contents: Vec<Cow<[u8]>> = records
        .iter()
        .map(|record| {
            if strip_whitespace {
                Cow::Owned(strip_ignorable(&record.content))
            } else {
                Cow::Borrowed(record.content.as_slice())
            }
        })
        .collect();

    let pairs: Vec<(usize, usize)> = (0..records.len())
        .flat_map(|i| (i + 1..records.len()).map(move |j| (i, j)))
        .collect();

    reporter.on_compare_start(pairs.len());

    let map: DashMap<PairKey, usize> = DashMap::with_capacity(pairs.len());
    pairs.par_iter().for_each(|&(i, j)| {
        let distance = levenshtein(&contents[i], &contents[j]);
        reporter.on_pair_computed(&records[i].path, &records[j].path, distance);
        map.insert(PairKey::new(&records[i].path, &records[j].path), distance);
    });

    ComparisonResult {
        distances: map.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentReporter;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(path: &str, content: &[u8]) -> FileRecord {
        FileRecord::new(path, content.to_vec())
    }

    #[test]
    fn test_pair_key_is_orientation_independent() {
        assert_eq!(PairKey::new("a.txt", "b.txt"), PairKey::new("b.txt", "a.txt"));
        assert_eq!(PairKey::new("b.txt", "a.txt").render(), "a.txt|b.txt");
    }

    #[test]
    #[should_panic(expected = "never compares a file to itself")]
    fn test_pair_key_rejects_equal_identifiers() {
        let _ = PairKey::new("same.txt", "same.txt");
    }

    struct CountingReporter {
        pairs: AtomicUsize,
    }

    impl crate::progress::ProgressReporter for CountingReporter {
        fn on_pair_computed(&self, path_a: &str, path_b: &str, _distance: usize) {
            assert_ne!(path_a, path_b);
            self.pairs.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_reporter_called_once_per_unordered_pair() {
        let records: Vec<FileRecord> = (0..4)
            .map(|i| record(&format!("f{i}"), format!("body {i}").as_bytes()))
            .collect();
        let reporter = CountingReporter {
            pairs: AtomicUsize::new(0),
        };

        let result = compare_all(&records, false, &reporter);

        assert_eq!(reporter.pairs.load(Ordering::Relaxed), 6); // 4·3/2
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_entry_count_is_n_choose_2() {
        let records: Vec<FileRecord> = (0..5)
            .map(|i| record(&format!("f{i}"), format!("content {i}").as_bytes()))
            .collect();
        let result = compare_all(&records, false, &SilentReporter);
        assert_eq!(result.len(), 10);
        for (key, _) in result.iter() {
            assert_ne!(key.first(), key.second());
        }
    }

    #[test]
    fn test_whitespace_stripping_collapses_layout_differences() {
        let records = vec![record("a", b"a b"), record("b", b"ab")];
        let key = PairKey::new("a", "b");

        let stripped = compare_all(&records, true, &SilentReporter);
        assert_eq!(stripped.get(&key), Some(0));

        let raw = compare_all(&records, false, &SilentReporter);
        assert_eq!(raw.get(&key), Some(1));
    }

    #[test]
    fn test_identical_content_is_zero_regardless_of_flag() {
        let records = vec![record("a", b"same text\n"), record("b", b"same text\n")];
        let key = PairKey::new("a", "b");
        for strip in [false, true] {
            let result = compare_all(&records, strip, &SilentReporter);
            assert_eq!(result.get(&key), Some(0));
        }
    }

    #[test]
    fn test_stripping_never_increases_distance() {
        let records = vec![
            record("a", b"fn main() {\n    run();\n}\n"),
            record("b", b"fn main(){run();}"),
        ];
        let key = PairKey::new("a", "b");
        let raw = compare_all(&records, false, &SilentReporter).get(&key).unwrap();
        let stripped = compare_all(&records, true, &SilentReporter).get(&key).unwrap();
        assert!(stripped <= raw);
    }

    #[test]
    fn test_single_record_yields_empty_result() {
        let records = vec![record("only", b"content")];
        let result = compare_all(&records, true, &SilentReporter);
        assert!(result.is_empty());
    }
}
