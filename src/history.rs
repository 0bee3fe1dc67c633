//! # Optimisation History
//!
//! Passive, append-only record of per-generation summary statistics. The
//! engine writes one [`HistoryRecord`] per completed generation and never
//! reads the history back; it exists for external consumers (plotting,
//! analysis) to inspect after or during a run.

/// Summary statistics for one completed generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRecord {
    /// Fitness of the best feasible individual found so far.
    pub best_fitness: f64,
    /// Mean fitness over the generation's evaluated population.
    pub mean_fitness: f64,
}

/// Append-only sequence of per-generation records, in chronological order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one generation's record.
    pub fn write_record(&mut self, best_fitness: f64, mean_fitness: f64) {
        self.records.push(HistoryRecord {
            best_fitness,
            mean_fitness,
        });
    }

    /// All records so far, oldest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Best-fitness series, one entry per completed generation.
    pub fn best_fitness(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_fitness).collect()
    }

    /// Mean-fitness series, one entry per completed generation.
    pub fn mean_fitness(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.mean_fitness).collect()
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discards all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_accumulate_in_order() {
        let mut history = History::new();
        history.write_record(3.0, 5.0);
        history.write_record(2.0, 4.0);
        history.write_record(1.0, 2.5);

        assert_eq!(history.len(), 3);
        assert_eq!(history.best_fitness(), vec![3.0, 2.0, 1.0]);
        assert_eq!(history.mean_fitness(), vec![5.0, 4.0, 2.5]);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.write_record(1.0, 1.0);
        history.clear();

        assert!(history.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialises_to_json() {
        let mut history = History::new();
        history.write_record(1.5, 3.0);

        let json = serde_json::to_string(&history).unwrap();
        let parsed: History = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.records(), history.records());
    }
}
