//! Wizard controller
//!
//! Owns the current step and the form, gates forward navigation and hands the
//! finished form to a [`SubmissionSink`].

use crate::campaign::form::{CampaignFormData, FormPatch};
use crate::campaign::submit::SubmissionSink;
use crate::error::{Error, Result};
use tracing::{debug, info};

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Objective, targeting, budget
    #[default]
    Basics,
    /// Keywords and categories
    KeywordsCategories,
    /// Review and recommendations
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Basics,
        WizardStep::KeywordsCategories,
        WizardStep::Results,
    ];

    /// Zero-based step index
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Basics => 0,
            WizardStep::KeywordsCategories => 1,
            WizardStep::Results => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Translation key of the step title
    pub fn title_key(&self) -> &'static str {
        match self {
            WizardStep::Basics => "step_basics",
            WizardStep::KeywordsCategories => "step_keywords",
            WizardStep::Results => "step_results",
        }
    }

    /// Translation key of the step description
    pub fn description_key(&self) -> &'static str {
        match self {
            WizardStep::Basics => "step_basics_desc",
            WizardStep::KeywordsCategories => "step_keywords_desc",
            WizardStep::Results => "step_results_desc",
        }
    }
}

/// Whether the wizard may move forward from `step` given `form`
pub fn can_advance(form: &CampaignFormData, step: WizardStep) -> bool {
    match step {
        WizardStep::Basics => !form.objective.is_empty() && form.campaign_budget.amount > 0.0,
        WizardStep::KeywordsCategories => !form.keywords.is_empty() && !form.categories.is_empty(),
        WizardStep::Results => true,
    }
}

/// Multi-step campaign wizard
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    step: WizardStep,
    form: CampaignFormData,
    completed: bool,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing form, on the first step
    pub fn with_form(form: CampaignFormData) -> Self {
        Self {
            step: WizardStep::Basics,
            form,
            completed: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &CampaignFormData {
        &self.form
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Gate for the given step, evaluated against the current form
    pub fn can_advance(&self, step: WizardStep) -> bool {
        can_advance(&self.form, step)
    }

    /// Move to the next step when the current one allows it.
    ///
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };
        if !self.can_advance(self.step) {
            debug!(step = ?self.step, "Advance blocked by incomplete step");
            return false;
        }
        debug!(from = ?self.step, to = ?next, "Advancing wizard");
        self.step = next;
        true
    }

    /// Move to the previous step; no-op on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                debug!(from = ?self.step, to = ?prev, "Retreating wizard");
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Shallow-merge a patch into the form
    pub fn update(&mut self, patch: FormPatch) {
        if patch.is_empty() {
            return;
        }
        self.form.merge(patch);
    }

    /// Hand the final form snapshot to `sink`.
    ///
    /// Only available on the terminal step.
    pub fn complete(&mut self, sink: &mut dyn SubmissionSink) -> Result<()> {
        if !self.step.is_terminal() {
            return Err(Error::NotAtTerminalStep);
        }
        sink.submit(&self.form)?;
        self.completed = true;
        info!(
            keywords = self.form.keywords.len(),
            categories = self.form.categories.len(),
            "Campaign completed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::form::Budget;

    #[derive(Default)]
    struct RecordingSink {
        received: Vec<CampaignFormData>,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&mut self, form: &CampaignFormData) -> Result<()> {
            self.received.push(form.clone());
            Ok(())
        }
    }

    fn basics_patch(objective: &str, amount: f64) -> FormPatch {
        FormPatch {
            objective: Some(objective.to_string()),
            campaign_budget: Some(Budget {
                amount,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_can_advance_basics() {
        let mut wizard = WizardController::new();
        wizard.update(basics_patch("", 100.0));
        assert!(!wizard.can_advance(WizardStep::Basics));

        wizard.update(basics_patch("Grow awareness", 0.0));
        assert!(!wizard.can_advance(WizardStep::Basics));

        wizard.update(basics_patch("Grow awareness", 50000.0));
        assert!(wizard.can_advance(WizardStep::Basics));
    }

    #[test]
    fn test_can_advance_keywords() {
        let mut form = CampaignFormData::default();
        form.keywords.add("skincare");
        assert!(!can_advance(&form, WizardStep::KeywordsCategories));
        form.categories.toggle(3, true);
        assert!(can_advance(&form, WizardStep::KeywordsCategories));
        assert!(can_advance(&CampaignFormData::default(), WizardStep::Results));
    }

    #[test]
    fn test_navigation_is_gated_and_clamped() {
        let mut wizard = WizardController::new();
        assert!(!wizard.retreat());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::Basics);

        wizard.update(basics_patch("Launch", 1000.0));
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::KeywordsCategories);
        assert!(!wizard.advance());

        let mut form = wizard.form().clone();
        form.keywords.add("glow");
        form.categories.toggle(1, true);
        wizard.update(FormPatch {
            keywords: Some(form.keywords),
            categories: Some(form.categories),
            ..Default::default()
        });
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::Results);
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::Results);

        assert!(wizard.retreat());
        assert_eq!(wizard.current_step(), WizardStep::KeywordsCategories);
    }

    #[test]
    fn test_retreat_is_unconditional() {
        let mut wizard = WizardController::new();
        wizard.update(basics_patch("Launch", 1000.0));
        wizard.advance();
        // Clearing the objective does not block going back
        wizard.update(basics_patch("", 0.0));
        assert!(wizard.retreat());
        assert_eq!(wizard.current_step(), WizardStep::Basics);
    }

    #[test]
    fn test_complete_only_on_terminal_step() {
        let mut sink = RecordingSink::default();
        let mut wizard = WizardController::new();
        assert!(matches!(
            wizard.complete(&mut sink),
            Err(Error::NotAtTerminalStep)
        ));
        assert!(sink.received.is_empty());

        let mut form = CampaignFormData::default();
        form.objective = "Launch".into();
        form.campaign_budget.amount = 10.0;
        form.keywords.add("glow");
        form.categories.toggle(2, true);
        let mut wizard = WizardController::with_form(form.clone());
        wizard.advance();
        wizard.advance();
        wizard.complete(&mut sink).unwrap();
        assert!(wizard.is_completed());
        assert_eq!(sink.received, vec![form]);
    }

    #[test]
    fn test_step_indices() {
        assert_eq!(WizardStep::from_index(1), Some(WizardStep::KeywordsCategories));
        assert_eq!(WizardStep::from_index(3), None);
        assert_eq!(WizardStep::Basics.prev(), None);
        assert!(WizardStep::Results.is_terminal());
    }
}
