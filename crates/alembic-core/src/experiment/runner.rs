//! Experiment step sequencing

use super::definition::{ExperimentDefinition, ExperimentStep};

/// An in-flight scripted experiment
///
/// Advances one tick at a time; `Wait` steps suspend the cursor and are
/// consumed internally. The run holds no reference to the vessel, so
/// dropping it (on reset) cancels every remaining step.
#[derive(Debug, Clone)]
pub struct ExperimentRun {
    definition: ExperimentDefinition,
    cursor: usize,
    wait: u32,
}

impl ExperimentRun {
    pub fn new(definition: ExperimentDefinition) -> Self {
        Self {
            definition,
            cursor: 0,
            wait: 0,
        }
    }

    pub fn definition(&self) -> &ExperimentDefinition {
        &self.definition
    }

    /// Advance one tick and return the steps due now.
    ///
    /// Runs consecutive non-wait steps in one tick; a `Wait` step stops the
    /// sweep and suspends for its duration.
    pub fn poll(&mut self) -> Vec<ExperimentStep> {
        if self.wait > 0 {
            self.wait -= 1;
            if self.wait > 0 {
                return Vec::new();
            }
        }

        let mut due = Vec::new();
        while self.cursor < self.definition.steps.len() {
            let step = self.definition.steps[self.cursor].clone();
            self.cursor += 1;
            match step {
                ExperimentStep::Wait { ticks } => {
                    self.wait = ticks;
                    break;
                }
                other => due.push(other),
            }
        }
        due
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.definition.steps.len() && self.wait == 0
    }
}
