//! Gestalt (Ratcliff/Obershelp) similarity ratio.
//!
//! `ratio(a, b) = 2 * M / (len(a) + len(b))` where `M` is the total length
//! of the matching blocks found by recursively taking the longest common
//! substring and repeating on the unmatched pieces to its left and right.
//! Lengths are in characters.
//!
//! Ties between equally long common substrings go to the one that starts
//! earliest in `a`, then earliest in `b`. When `b` has 200 or more
//! characters, characters occurring in more than 1% of it are "popular" and
//! cannot seed a match (they can still extend one).

use std::collections::HashMap;

const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity ratio in [0, 1]. Two empty strings score 1.0.
///
/// # Examples
///
/// ```
/// use fintel_identity::resolver::similarity_ratio;
///
/// assert_eq!(similarity_ratio("abcd", "abcd"), 1.0);
/// assert_eq!(similarity_ratio("abcd", "wxyz"), 0.0);
/// assert_eq!(similarity_ratio("abcdefghij", "abcdefgxyz"), 0.7);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let matcher = SequenceMatcher::new(a, b);
    let total = matcher.a.len() + matcher.b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matcher.matching_characters() as f64 / total as f64
}

struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Indices of each non-popular character of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, indices| indices.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` x `b[blo..bhi]` as `(i, j, size)`.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(indices) = self.b2j.get(&self.a[i]) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let previous = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let size = previous + 1;
                    new_j2len.insert(j, size);
                    if size > best_size {
                        best_i = i + 1 - size;
                        best_j = j + 1 - size;
                        best_size = size;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Extend through popular characters, which never seed a match.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// Total size of all matching blocks.
    fn matching_characters(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, size) = self.find_longest_match(alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            total += size;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                queue.push((i + size, ahi, j + size, bhi));
            }
        }

        total
    }
}
