//! Levenshtein edit distance over byte slices.
//!
//! Classic dynamic program kept to two rolling rows, so memory is
//! O(min(m, n)) instead of the full (m+1)×(n+1) table. All three edit
//! operations (insert, delete, substitute) cost 1; the result is an
//! exact integer, total over any pair of finite byte slices.

use std::cmp::min;

/// Minimum number of single-byte insertions, deletions, and
/// substitutions required to transform `a` into `b`.
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Roll the rows over the shorter operand.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (j, &long_byte) in long.iter().enumerate() {
        curr[0] = j + 1;
        for (i, &short_byte) in short.iter().enumerate() {
            let substitution = prev[i] + usize::from(short_byte != long_byte);
            let deletion = prev[i + 1] + 1;
            let insertion = curr[i] + 1;
            curr[i + 1] = min(substitution, min(deletion, insertion));
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
