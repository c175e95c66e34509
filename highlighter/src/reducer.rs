//! Span reduction: union of overlapping matches, then deterministic ordering.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// How overlapping spans are unioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Sort, then fold each span into its predecessor when they overlap.
    /// Output is always pairwise disjoint.
    #[default]
    Sweep,
    /// One pass per span over all others, widening it by every span it
    /// directly overlaps. Transitive chains (`a` overlaps `b` overlaps `c`,
    /// `a` and `c` disjoint) can leave overlapping results behind.
    ///
    /// The union accumulates across every overlapping `j`. Legacy callers that
    /// rebuilt the widened span from `i`'s own bounds for each `j` kept only
    /// the last overlap: `[2,5)` between `[0,3)` and `[4,7)` widens to `[0,7)`
    /// here, where they produced `[2,7)`.
    SinglePass,
}

/// Merge `spans` with `strategy` and return them sorted by `(start, end)`.
pub fn reduce(spans: &[Span], strategy: MergeStrategy) -> Vec<Span> {
    let merged = match strategy {
        MergeStrategy::Sweep => merge_sweep(spans),
        MergeStrategy::SinglePass => merge_single_pass(spans),
    };
    sort_spans(merged)
}

/// Single-pass approximate union, duplicates dropped in encounter order.
pub fn merge_single_pass(spans: &[Span]) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for (i, span) in spans.iter().enumerate() {
        let mut widened = *span;
        for (j, other) in spans.iter().enumerate() {
            if i != j && span.overlaps(other) {
                widened = widened.union(other);
            }
        }
        if !merged.contains(&widened) {
            merged.push(widened);
        }
    }
    merged
}

/// Classic sort-then-sweep union. Touching spans stay separate.
pub fn merge_sweep(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort();

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        if let Some(last) = merged.last_mut() {
            if *last == span || last.overlaps(&span) {
                *last = last.union(&span);
                continue;
            }
        }
        merged.push(span);
    }
    merged
}

/// Stable ascending order by `(start, end)`.
pub fn sort_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp(start: usize, end: usize) -> Span {
        Span::new(start, end)
    }

    #[test]
    fn test_disjoint_input_is_unchanged() {
        let spans = vec![sp(0, 3), sp(6, 10), sp(11, 15)];
        assert_eq!(merge_single_pass(&spans), spans);
        assert_eq!(merge_sweep(&spans), spans);
    }

    #[test]
    fn test_duplicates_are_suppressed() {
        let spans = vec![sp(6, 10), sp(0, 3), sp(6, 10)];
        assert_eq!(merge_single_pass(&spans), vec![sp(6, 10), sp(0, 3)]);
        assert_eq!(merge_sweep(&spans), vec![sp(0, 3), sp(6, 10)]);
    }

    #[test]
    fn test_touching_spans_are_not_merged() {
        let spans = vec![sp(0, 3), sp(3, 6)];
        assert_eq!(merge_single_pass(&spans), spans);
        assert_eq!(merge_sweep(&spans), spans);
    }

    #[test]
    fn test_pairwise_overlap_merges() {
        // "ab" and "bc" in "abc"
        let spans = vec![sp(0, 2), sp(1, 3)];
        assert_eq!(merge_single_pass(&spans), vec![sp(0, 3)]);
        assert_eq!(merge_sweep(&spans), vec![sp(0, 3)]);
    }

    #[test]
    fn test_single_pass_accumulates_every_direct_overlap() {
        // The middle span overlaps both neighbours and absorbs them
        let spans = vec![sp(3, 6), sp(0, 4), sp(5, 9)];
        let merged = merge_single_pass(&spans);
        assert_eq!(merged[0], sp(0, 9));
    }

    #[test]
    fn test_single_pass_keeps_earlier_overlaps() {
        // The middle span overlaps its left neighbour first, its right one last
        let spans = vec![sp(0, 3), sp(2, 5), sp(4, 7)];
        let merged = merge_single_pass(&spans);
        assert_eq!(merged[1], sp(0, 7));
        assert_ne!(merged[1], sp(2, 7));
    }

    #[test]
    fn test_single_pass_under_merges_transitive_chain() {
        let spans = vec![sp(0, 3), sp(2, 5), sp(4, 7)];
        let reduced = reduce(&spans, MergeStrategy::SinglePass);
        assert_eq!(reduced, vec![sp(0, 5), sp(0, 7), sp(2, 7)]);
    }

    #[test]
    fn test_sweep_merges_transitive_chain() {
        let spans = vec![sp(0, 3), sp(2, 5), sp(4, 7)];
        assert_eq!(reduce(&spans, MergeStrategy::Sweep), vec![sp(0, 7)]);
    }

    #[test]
    fn test_sort_orders_by_start_then_end() {
        let sorted = sort_spans(vec![sp(4, 9), sp(0, 5), sp(4, 6), sp(0, 2)]);
        assert_eq!(sorted, vec![sp(0, 2), sp(0, 5), sp(4, 6), sp(4, 9)]);
    }

    #[test]
    fn test_merge_strategy_serde_names() {
        assert_eq!(serde_json::to_string(&MergeStrategy::SinglePass).unwrap(), "\"single_pass\"");
        let parsed: MergeStrategy = serde_json::from_str("\"sweep\"").unwrap();
        assert_eq!(parsed, MergeStrategy::Sweep);
    }
}
