//! Deterministic ranking and rendering of comparison results.
//!
//! Most-different pairs come first (distance descending); ties are
//! broken by the canonical pair string ascending. Because the tie-break
//! key is the canonicalized pair rendering rather than insertion order,
//! output is byte-identical across runs even when pairs are computed in
//! parallel in arbitrary order.

use crate::matrix::{ComparisonResult, PairKey};
use std::cmp::Ordering;

/// One line of the final ranking, pulled from a [`ComparisonResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: PairKey,
    pub distance: usize,
}

impl RankedEntry {
    pub fn render(&self) -> String {
        format!("{}:{}", self.key.render(), self.distance)
    }
}

/// Produce the total ordering over all pairs: distance descending,
/// then pair string ascending.
pub fn rank(result: &ComparisonResult) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = result
        .iter()
        .map(|(key, distance)| RankedEntry {
            key: key.clone(),
            distance,
        })
        .collect();

    entries.sort_by(|l, r| match r.distance.cmp(&l.distance) {
        Ordering::Equal => l.key.render().cmp(&r.key.render()),
        other => other,
    });

    entries
}

/// Render the ranked listing, one `a|b:distance` line per pair.
pub fn render_lines(result: &ComparisonResult) -> Vec<String> {
    rank(result).iter().map(RankedEntry::render).collect()
}
