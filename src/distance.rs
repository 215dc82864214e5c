//! Levenshtein edit distance.
//!
//! [`edit_distance`] is the plain recursive definition and takes exponential
//! time; it is kept as the reference result. [`edit_distance_dp`] and
//! [`bounded_edit_distance`] compute the same number in polynomial time and
//! are the ones to use on real input. None of these fold case.

use rayon::prelude::*;

use crate::trie::Dictionary;

/// Levenshtein distance between `a` and `b` by direct recursion.
///
/// Compares characters from the end of both strings backwards. Exponential in
/// the input length; callers must keep inputs short.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    recursive_distance(&a, &b, a.len(), b.len())
}

// `m` and `n` are the lengths of the still unprocessed prefixes.
fn recursive_distance(a: &[char], b: &[char], m: usize, n: usize) -> usize {
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    if a[m - 1] == b[n - 1] {
        return recursive_distance(a, b, m - 1, n - 1);
    }

    let insert = recursive_distance(a, b, m, n - 1);
    let delete = recursive_distance(a, b, m - 1, n);
    let substitute = recursive_distance(a, b, m - 1, n - 1);
    1 + insert.min(delete).min(substitute)
}

/// Levenshtein distance using two rolling rows. Always equal to
/// [`edit_distance`].
pub fn edit_distance_dp(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, ac) in a.chars().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = usize::from(ac != b[j - 1]);
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Levenshtein distance restricted to a diagonal band of width `max_dist`.
///
/// Exact when the distance is at most `max_dist`; otherwise some value
/// greater than `max_dist` is returned. `usize::MAX` means no bound.
pub fn bounded_edit_distance(a: &str, b: &str, max_dist: usize) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if longer.len() - shorter.len() > max_dist {
        return max_dist.saturating_add(1);
    }

    let n = longer.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &sc) in shorter.iter().enumerate() {
        let row = i + 1;
        curr[0] = row;

        let col_min = row.saturating_sub(max_dist).max(1);
        let col_max = row.saturating_add(max_dist).min(n);

        for j in 1..=n {
            if j < col_min || j > col_max {
                curr[j] = max_dist.saturating_add(1);
                continue;
            }
            let cost = usize::from(sc != longer[j - 1]);
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Stored words within `max_dist` edits of `word`, nearest first and then
/// alphabetical, truncated to `limit`.
///
/// `word` is lowered with ASCII rules to match what the dictionary stores.
pub fn closest_words(
    dictionary: &Dictionary,
    word: &str,
    max_dist: usize,
    limit: usize,
) -> Vec<Suggestion> {
    let word = word.to_ascii_lowercase();
    let mut suggestions: Vec<Suggestion> = dictionary
        .collect("")
        .into_par_iter()
        .filter_map(|candidate| {
            let distance = bounded_edit_distance(&word, &candidate, max_dist);
            (distance <= max_dist).then_some(Suggestion {
                word: candidate,
                distance,
            })
        })
        .collect();

    suggestions.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
    suggestions.truncate(limit);
    suggestions
}
