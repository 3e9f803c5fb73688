use std::fmt;
use std::path::PathBuf;

use crate::foundation::error::{FailureKind, SpriteError};
use crate::validate::budget::BudgetCheck;

/// A successfully persisted artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    /// Creature id.
    pub creature_id: String,
    /// Artifact file name, `{id}.{ext}`.
    pub file_name: String,
    /// Where the sink stored it.
    pub location: PathBuf,
    /// Size read back after persisting.
    pub size_bytes: u64,
    /// Whether the artifact clears the size budget. A `false` here is reported, never retried.
    pub passed_size_gate: bool,
}

impl GenerationResult {
    /// Budget view of this artifact.
    pub fn budget(&self) -> BudgetCheck {
        BudgetCheck::new(self.file_name.clone(), self.size_bytes)
    }
}

/// Result of one creature within a batch.
#[derive(Debug)]
pub enum CreatureOutcome {
    /// Artifact written.
    Generated(GenerationResult),
    /// Generation failed; the error is already attributed to the creature.
    Failed {
        /// Creature id.
        creature_id: String,
        /// Failure cause.
        error: SpriteError,
    },
}

impl CreatureOutcome {
    /// Creature id either way.
    pub fn creature_id(&self) -> &str {
        match self {
            Self::Generated(r) => &r.creature_id,
            Self::Failed { creature_id, .. } => creature_id,
        }
    }

    /// Failure classification, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Generated(_) => None,
            Self::Failed { error, .. } => Some(error.kind()),
        }
    }
}

impl fmt::Display for CreatureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated(r) => write!(f, "{}", r.budget()),
            Self::Failed { creature_id, error } => {
                write!(f, "{creature_id}: failed [{}] {error}", error.kind().label())
            }
        }
    }
}

/// Everything a batch produced, in catalog order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Base seed the per-creature streams were derived from.
    pub base_seed: u64,
    /// One entry per attempted creature.
    pub outcomes: Vec<CreatureOutcome>,
    /// Set when the batch stopped early because of cancellation.
    pub cancelled: bool,
}

impl BatchReport {
    /// Successful artifacts.
    pub fn generated(&self) -> impl Iterator<Item = &GenerationResult> {
        self.outcomes.iter().filter_map(|o| match o {
            CreatureOutcome::Generated(r) => Some(r),
            CreatureOutcome::Failed { .. } => None,
        })
    }

    /// Failed creatures with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &SpriteError)> {
        self.outcomes.iter().filter_map(|o| match o {
            CreatureOutcome::Failed { creature_id, error } => Some((creature_id.as_str(), error)),
            CreatureOutcome::Generated(_) => None,
        })
    }

    /// Artifacts at or below the size budget.
    pub fn below_budget(&self) -> impl Iterator<Item = &GenerationResult> {
        self.generated().filter(|r| !r.passed_size_gate)
    }

    /// Whether anything failed.
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Failure counts per kind, in order of first occurrence.
    pub fn failure_counts(&self) -> Vec<(FailureKind, usize)> {
        let mut counts: Vec<(FailureKind, usize)> = Vec::new();
        for (_, e) in self.failures() {
            let kind = e.kind();
            match counts.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, n)) => *n += 1,
                None => counts.push((kind, 1)),
            }
        }
        counts
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ok = self.generated().count();
        writeln!(
            f,
            "Generated {ok}/{} sprites (seed {})",
            self.outcomes.len(),
            self.base_seed
        )?;

        let below: Vec<&str> = self.below_budget().map(|r| r.file_name.as_str()).collect();
        if !below.is_empty() {
            writeln!(f, "Below size budget: {}", below.join(", "))?;
        }
        if self.has_failures() {
            writeln!(f, "Failures:")?;
            for (kind, n) in self.failure_counts() {
                writeln!(f, "  {}: {n}", kind.label())?;
            }
            for (id, e) in self.failures() {
                writeln!(f, "  - {id}: {e}")?;
            }
        }
        if self.cancelled {
            writeln!(f, "Batch cancelled before completion")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/report.rs"]
mod tests;
