//! The ephemeral wizard session: one draft, one step position.
//!
//! A [`WizardSession`] is an explicit value owned by whoever drives the
//! wizard; there is no ambient singleton.  Navigation is deliberately
//! non-gating: every field is optional until submission, so the session
//! never blocks forward progress.  Hard requirements are enforced by the
//! submission pipeline, where a rejection is cheapest to communicate.

use crate::draft::{Draft, DraftPatch};
use crate::error::CoreError;
use crate::steps::{WizardStep, MAX_STEP, MIN_STEP, TOTAL_STEPS};

/// One traveller's in-progress walk through the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    draft: Draft,
    step: WizardStep,
}

impl WizardSession {
    /// Start a fresh session: default draft, step 1.
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            step: WizardStep::TripDetails,
        }
    }

    /// The current draft snapshot.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The active step.
    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Total number of steps (always 7).
    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    /// Shallow-merge a typed patch into the draft.
    pub fn merge(&mut self, patch: DraftPatch) {
        self.draft.merge(patch);
    }

    /// Set one draft field from its wire key and raw value.
    ///
    /// See [`Draft::set`] for the boundary rules.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.draft.set(key, value)
    }

    /// Advance one step.  No-op on the last step.
    pub fn next(&mut self) {
        let n = self.step.to_number();
        if n < MAX_STEP {
            self.step = WizardStep::from_number(n + 1).expect("step in range");
        }
    }

    /// Go back one step.  No-op on the first step.
    pub fn prev(&mut self) {
        let n = self.step.to_number();
        if n > MIN_STEP {
            self.step = WizardStep::from_number(n - 1).expect("step in range");
        }
    }

    /// Jump to a 1-based step number.  Out-of-range values are silently
    /// ignored; skipping steps is allowed since no step gates the next.
    pub fn go_to(&mut self, step: u8) {
        if let Ok(step) = WizardStep::from_number(step) {
            self.step = step;
        }
    }

    /// Restore the default draft and return to step 1.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
