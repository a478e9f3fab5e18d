//! Greedy longest-match search over the 8 KiB window.

use crate::format::{MAX_MATCH, MIN_MATCH, Match, WINDOW_SIZE};

/// Find the longest back-reference for the bytes starting at `pos`.
///
/// Every offset from 1 up to `min(WINDOW_SIZE, pos)` is tried in order. A
/// candidate only replaces the best one when it is strictly longer, and the
/// search stops at the first candidate reaching the length cap
/// `min(MAX_MATCH, input.len() - pos)`. The resulting offsets are part of the
/// byte-exact output other encoders produce, so this order must not change.
///
/// Returns `None` when nothing of at least [`MIN_MATCH`] bytes is found.
pub(crate) fn longest_match(input: &[u8], pos: usize) -> Option<Match> {
    let max_offset = WINDOW_SIZE.min(pos);
    let max_len = MAX_MATCH.min(input.len().saturating_sub(pos));

    let mut best = None;
    let mut best_len = MIN_MATCH - 1;

    for offset in 1..=max_offset {
        let len = match_length(input, pos, offset, max_len);
        if len > best_len {
            best_len = len;
            best = Some(Match {
                offset,
                length: len,
            });
            if len == max_len {
                break;
            }
        }
    }

    best
}

/// Length of the run at `pos` that equals the run `offset` bytes earlier.
///
/// The two runs may overlap when `offset < max_len`.
fn match_length(input: &[u8], pos: usize, offset: usize, max_len: usize) -> usize {
    let current = &input[pos..pos + max_len];
    let earlier = &input[pos - offset..pos - offset + max_len];
    current
        .iter()
        .zip(earlier)
        .take_while(|(a, b)| a == b)
        .count()
}
