// crates/core/src/schemas.rs
use serde::{Deserialize, Serialize};

use crate::catalog::Tool;

/// The router's verdict for one piece of input text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteDecision {
    pub tool: Tool,
    pub confidence: f64,
    /// Zero to two runners-up, never containing `tool` or each other twice.
    pub alternatives: Vec<Tool>,
}

/// A constructed URL that opens a tool pre-filled with text. Derived, not stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeepLink {
    pub url: String,
    pub label: String,
}

/// One unit of a workflow plan. `order` is the 1-based position within the
/// owning workflow and stays contiguous.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<Tool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub order: u32,
}

/// A TaskStep before it has an id or position.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTemplate {
    pub title: String,
    pub description: String,
    pub tool: Option<Tool>,
    pub prompt: Option<String>,
}

/// One suggested path (quick or thorough) toward a project goal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    pub steps: Vec<TaskStep>,
}
