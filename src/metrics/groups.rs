//! Rate partitioning.
//!
//! The orchestrator runs passes strictly one at a time and appends each
//! pass's full output before the next starts, so all hits for a given rate
//! occupy one contiguous span. [`partition_by_rate`] depends on that
//! invariant rather than re-verifying it.

use super::Hit;

/// A contiguous half-open span `[from, to)` of hits sharing one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultGroup {
    pub from: usize,
    pub to: usize,
    pub rate: u64,
}

impl ResultGroup {
    /// The hits this group covers.
    #[must_use]
    pub fn slice<'hits>(&self, hits: &'hits [Hit]) -> &'hits [Hit] {
        hits.get(self.from..self.to).unwrap_or(&[])
    }
}

/// Split an ordered hit sequence into maximal contiguous same-rate runs.
///
/// Groups come out in sequence order, do not overlap, and cover the input
/// exactly once; empty input yields no groups. Same-rate contiguity is a
/// documented precondition: if a caller violates it, groups follow the
/// rate-change boundaries exactly as encountered (possibly more groups
/// than distinct rates), and debug builds flag it as a programming error.
#[must_use]
pub fn partition_by_rate(hits: &[Hit]) -> Vec<ResultGroup> {
    let mut groups = Vec::new();
    let mut iter = hits.iter().enumerate();
    let Some((_, first)) = iter.next() else {
        return groups;
    };
    let mut from = 0usize;
    let mut rate = first.rate;
    for (index, hit) in iter {
        if hit.rate != rate {
            groups.push(ResultGroup { from, to: index, rate });
            from = index;
            rate = hit.rate;
        }
    }
    groups.push(ResultGroup {
        from,
        to: hits.len(),
        rate,
    });

    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::new();
        for group in &groups {
            debug_assert!(
                seen.insert(group.rate),
                "hits for rate {} are not contiguous",
                group.rate
            );
        }
    }

    groups
}
