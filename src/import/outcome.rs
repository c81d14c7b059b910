use serde::Serialize;

/// What happened to one imported row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", content = "reason", rename_all = "lowercase")]
pub enum RowOutcome {
    Created,
    Updated,
    /// The row matched an existing record and carried nothing to change.
    Unchanged,
    Skipped(String),
}

impl RowOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, RowOutcome::Skipped(_))
    }
}

/// Per-row outcomes of an import, keyed by the row's natural key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    pub rows: Vec<(String, RowOutcome)>,
}

impl ImportSummary {
    pub fn push(&mut self, key: impl Into<String>, outcome: RowOutcome) {
        self.rows.push((key.into(), outcome));
    }

    pub fn success_count(&self) -> usize {
        self.rows.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn count_of(&self, wanted: &RowOutcome) -> usize {
        self.rows
            .iter()
            .filter(|(_, o)| std::mem::discriminant(o) == std::mem::discriminant(wanted))
            .count()
    }

    /// Reasons of the skipped rows, in input order.
    pub fn errors(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|(_, o)| match o {
                RowOutcome::Skipped(reason) => Some(reason.clone()),
                _ => None,
            })
            .collect()
    }
}
