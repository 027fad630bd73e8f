//! Output regions owned by one session.

use crate::domain::TokenLine;
use crate::view::container::TreeContainer;

pub const NO_STEPS_PLACEHOLDER: &str = "No optimization steps needed";
pub const NO_VARIABLES_PLACEHOLDER: &str = "No variables defined";
pub const VARIABLES_HEADING: &str = "Final Variable Values:";

/// State of the steps/result regions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Nothing rendered yet (or cleared)
    #[default]
    Pending,
    Completed {
        steps: Vec<String>,
        /// Preformatted `name = value` lines
        variables: Vec<String>,
    },
    Failed {
        message: String,
    },
}

/// Token display, tree display and result display of one optimize run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputView {
    pub tokens: Vec<TokenLine>,
    pub trees: TreeContainer,
    pub outcome: Outcome,
}

impl OutputView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every region.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.trees.clear();
        self.outcome = Outcome::Pending;
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// Steps labeled by 1-based position, or the placeholder when there are none.
    pub fn step_lines(&self) -> Vec<String> {
        match &self.outcome {
            Outcome::Completed { steps, .. } if steps.is_empty() => {
                vec![NO_STEPS_PLACEHOLDER.to_string()]
            }
            Outcome::Completed { steps, .. } => steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("Step {}: {}", i + 1, step))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Variable lines, or the placeholder when there are none.
    pub fn variable_lines(&self) -> Vec<String> {
        match &self.outcome {
            Outcome::Completed { variables, .. } if variables.is_empty() => {
                vec![NO_VARIABLES_PLACEHOLDER.to_string()]
            }
            Outcome::Completed { variables, .. } => variables.clone(),
            _ => Vec::new(),
        }
    }

    /// `Error: <description>` when the run failed.
    pub fn error_line(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Failed { message } => Some(format!("Error: {}", message)),
            _ => None,
        }
    }
}
