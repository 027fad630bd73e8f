//! Optimize session orchestration
//!
//! Drives one optimize request end to end: validation, tokens, the remote
//! call, response checks, tree rendering and the textual result.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{normalize, OptimizationResult, Tokenizer};
use crate::infrastructure::traits::OptimizerClient;
use crate::view::{Outcome, OutputView, TreeRenderer};

/// One optimize session with its own output regions.
///
/// Runs take `&mut self`, so a session never has two requests rendering into
/// the same regions.
pub struct Session {
    client: Arc<dyn OptimizerClient>,
    tokenizer: Tokenizer,
    renderer: TreeRenderer,
    view: OutputView,
}

impl Session {
    pub fn new(client: Arc<dyn OptimizerClient>, renderer: TreeRenderer) -> Self {
        Self {
            client,
            tokenizer: Tokenizer::new(),
            renderer,
            view: OutputView::new(),
        }
    }

    /// Output of the most recent run.
    pub fn view(&self) -> &OutputView {
        &self.view
    }

    /// Run one optimization; failures are rendered into the view.
    pub fn run_optimization(&mut self, expression: &str) -> &OutputView {
        // The failure is already part of the view
        let _ = self.execute(expression);
        &self.view
    }

    /// Like [`Session::run_optimization`], but also returns the failure.
    #[instrument(level = "debug", skip(self, expression), fields(lines = expression.lines().count()))]
    pub fn execute(&mut self, expression: &str) -> ApplicationResult<&OutputView> {
        self.view.clear();
        match self.process(expression) {
            Ok(()) => Ok(&self.view),
            Err(e) => {
                warn!("optimize failed: {}", e);
                // No partial trees or steps next to an error
                self.view.trees.clear();
                self.view.outcome = Outcome::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    fn process(&mut self, expression: &str) -> ApplicationResult<()> {
        if expression.trim().is_empty() {
            return Err(ApplicationError::InputValidation(
                "please enter an expression".to_string(),
            ));
        }

        self.view.tokens = self.tokenizer.tokenize(expression);
        debug!("process: {} token lines", self.view.tokens.len());

        let reply = self
            .client
            .optimize(expression)
            .map_err(|message| ApplicationError::Transport {
                status: None,
                message,
            })?;
        if !reply.is_success() {
            return Err(ApplicationError::Transport {
                status: Some(reply.status),
                message: format!("HTTP status {}", reply.status),
            });
        }

        let result = parse_response(&reply.body)?;
        if result.asts.len() != self.view.tokens.len() {
            // Trees are matched to lines by position only
            warn!(
                "optimizer returned {} trees for {} non-blank lines",
                result.asts.len(),
                self.view.tokens.len()
            );
        }

        for (i, ast) in result.asts.iter().enumerate() {
            if let Some(root) = normalize(ast.as_ref()) {
                let title = format!("Line {} AST", i + 1);
                self.renderer.render(&root, &mut self.view.trees, &title);
            }
        }

        self.view.outcome = Outcome::Completed {
            variables: result.variable_lines(),
            steps: result.steps,
        };
        Ok(())
    }
}

/// Parse and shape-check an optimizer response body.
///
/// A missing or `null` required field, a non-JSON body and wrongly typed
/// content are all reported as [`ApplicationError::MalformedResponse`].
pub fn parse_response(body: &str) -> ApplicationResult<OptimizationResult> {
    let value = parse_json(body).map_err(|e| {
        ApplicationError::MalformedResponse(format!("body is not valid JSON ({})", e))
    })?;
    let object = value.as_object().ok_or_else(|| {
        ApplicationError::MalformedResponse("expected a JSON object".to_string())
    })?;
    for field in OptimizationResult::REQUIRED_FIELDS {
        if object.get(field).map_or(true, Value::is_null) {
            return Err(ApplicationError::MalformedResponse(format!(
                "missing field `{}`",
                field
            )));
        }
    }
    OptimizationResult::deserialize(serde_stacker::Deserializer::new(value))
        .map_err(|e| ApplicationError::MalformedResponse(e.to_string()))
}

/// Parse without a nesting limit; the stack grows on demand for deep trees.
fn parse_json(body: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}
