//! Snippet windowing around an anchor span.

use crate::span::Span;

/// Compute the excerpt window around `around` for a text of `text_len`
/// positions, spending at most `max_count` on the window.
///
/// If the whole text fits, the window is the whole text. Otherwise the anchor
/// grows one position at a time, left first then right, so the expansion stays
/// roughly symmetric and keeps going on one side once the other is pinned to
/// a text boundary. `count` starts one above the anchor length, which makes
/// the resulting window at most `max_count` long (or the anchor itself, if the
/// anchor is already longer).
pub fn compute_window(text_len: usize, around: Span, max_count: usize) -> Span {
    if text_len <= max_count {
        return Span::new(0, text_len);
    }

    let around = Span::new(around.start.min(text_len), around.end.min(text_len));
    let mut left = around.start;
    let mut right = around.end;
    let mut count = around.len() + 1;

    loop {
        let mut moved = false;
        if left > 0 && count <= max_count {
            left -= 1;
            count += 1;
            moved = true;
        }
        if right < text_len && count <= max_count {
            right += 1;
            count += 1;
            moved = true;
        }
        // Both sides pinned before the budget ran out
        if count > max_count || !moved {
            break;
        }
    }

    Span::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp(start: usize, end: usize) -> Span {
        Span::new(start, end)
    }

    #[test]
    fn test_window_whole_text_when_it_fits() {
        assert_eq!(compute_window(18, sp(6, 10), 18), sp(0, 18));
        assert_eq!(compute_window(18, sp(6, 10), 100), sp(0, 18));
        assert_eq!(compute_window(0, sp(0, 0), 0), sp(0, 0));
    }

    #[test]
    fn test_window_anchor_at_text_start_expands_right() {
        // "Plz 2 snip snip me" around "Plz"
        assert_eq!(compute_window(18, sp(0, 3), 10), sp(0, 10));
    }

    #[test]
    fn test_window_anchor_at_text_end_expands_left() {
        assert_eq!(compute_window(18, sp(16, 18), 10), sp(8, 18));
    }

    #[test]
    fn test_window_symmetric_in_the_middle() {
        // anchor of 2, budget 10: count 3 -> 11 over 8 steps, 4 per side
        assert_eq!(compute_window(100, sp(50, 52), 10), sp(46, 56));
    }

    #[test]
    fn test_window_biased_right_when_left_pinned_early() {
        assert_eq!(compute_window(100, sp(1, 3), 10), sp(0, 10));
    }

    #[test]
    fn test_window_zero_budget_keeps_anchor() {
        assert_eq!(compute_window(18, sp(6, 10), 0), sp(6, 10));
    }

    #[test]
    fn test_window_anchor_longer_than_budget() {
        assert_eq!(compute_window(50, sp(10, 30), 5), sp(10, 30));
    }

    #[test]
    fn test_window_never_exceeds_budget() {
        for max_count in 1..30 {
            for start in 0..20 {
                let w = compute_window(40, sp(start, start + 1), max_count);
                assert!(w.len() <= max_count.max(1), "max {} start {} -> {:?}", max_count, start, w);
                assert!(w.contains(&sp(start, start + 1)));
                assert!(w.end <= 40);
            }
        }
    }
}
