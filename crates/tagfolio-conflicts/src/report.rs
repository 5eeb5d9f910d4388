use tagfolio_core::models::{ConflictType, PlanConflict, Severity};

/// Resolver output with severity helpers.
#[derive(Debug, Clone, Default)]
pub struct ConflictReport {
    conflicts: Vec<PlanConflict>,
}

impl ConflictReport {
    pub fn new(conflicts: Vec<PlanConflict>) -> Self {
        Self { conflicts }
    }

    pub fn conflicts(&self) -> &[PlanConflict] {
        &self.conflicts
    }

    pub fn into_inner(self) -> Vec<PlanConflict> {
        self.conflicts
    }

    /// Most severe first; ties keep detector order, then year.
    pub fn by_severity(&self) -> Vec<&PlanConflict> {
        let mut sorted: Vec<&PlanConflict> = self.conflicts.iter().collect();
        sorted.sort_by_key(|c| c.severity);
        sorted
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.conflicts.iter().filter(|c| c.severity == severity).count()
    }

    pub fn of_type(&self, conflict_type: ConflictType) -> impl Iterator<Item = &PlanConflict> {
        self.conflicts
            .iter()
            .filter(move |c| c.conflict_type == conflict_type)
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.conflicts.iter().map(|c| c.severity).min()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }
}
