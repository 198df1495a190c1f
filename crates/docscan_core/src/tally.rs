/// Label of the synthetic grand-total row appended to rendered tallies.
pub const TOTAL_LABEL: &str = "Total";

/// Frequency table of full PEP status names.
///
/// Constructed fresh per reconciliation call and returned by value; there is
/// no shared or cross-run state. Every increment of a named status is paired
/// with exactly one increment of the total, so the sum of the named counts
/// always equals `total()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTally {
    counts: Vec<(String, u64)>,
    total: u64,
}

impl StatusTally {
    /// A tally with every name of `vocabulary` present at zero.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            counts: vocabulary.into_iter().map(|name| (name.into(), 0)).collect(),
            total: 0,
        }
    }

    /// Count one occurrence of `status` and one toward the total.
    ///
    /// A status outside the initial vocabulary gets its own row, appended in
    /// first-seen order ahead of the total.
    pub fn record(&mut self, status: &str) {
        match self.counts.iter_mut().find(|(name, _)| name == status) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((status.to_string(), 1)),
        }
        self.total += 1;
    }

    pub fn count(&self, status: &str) -> u64 {
        self.counts
            .iter()
            .find(|(name, _)| name == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// True when nothing has been recorded.
    pub fn is_zero(&self) -> bool {
        self.total == 0
    }

    /// Ordered (status, count) rows: vocabulary order, `Total` last.
    pub fn rows(&self) -> Vec<(String, u64)> {
        let mut rows = self.counts.clone();
        rows.push((TOTAL_LABEL.to_string(), self.total));
        rows
    }
}
