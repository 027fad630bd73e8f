//! Wire model of the optimizer response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Binary AST node as produced by the optimizer service.
///
/// A node without `left` and `right` is a leaf; any child makes it internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(
        default,
        deserialize_with = "scalar_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<AstNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<AstNode>>,
}

impl AstNode {
    pub fn leaf(node_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            value: Some(value.into()),
            left: None,
            right: None,
        }
    }

    pub fn branch(
        node_type: impl Into<String>,
        left: Option<AstNode>,
        right: Option<AstNode>,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            value: None,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Accepts strings and JSON scalars; empty strings and `null` count as absent.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "node value must be a scalar, got {other}"
        ))),
    }
}

/// Successful optimizer response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// One entry per non-blank input line; `None` means no tree for that line
    pub asts: Vec<Option<AstNode>>,
    pub steps: Vec<String>,
    /// Final bindings in server order
    pub variables: Map<String, Value>,
}

impl OptimizationResult {
    /// Fields every response must carry.
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["asts", "steps", "variables"];

    /// `name = value` lines; strings are shown unquoted.
    pub fn variable_lines(&self) -> Vec<String> {
        self.variables
            .iter()
            .map(|(name, value)| format!("{} = {}", name, display_value(value)))
            .collect()
    }
}

/// Text form of a variable value as shown to the user.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
