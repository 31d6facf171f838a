use serde::{Deserialize, Serialize};
use serde_json::Value;
use switchboard_core::{TaskStep, Tool};

use crate::store::{Direction, Project, Step};

// Routing endpoint
#[derive(Deserialize)]
pub struct RouteRequest {
    pub prompt: Option<String>,
}

/// Request framing handed along with the decision so downstream surfaces can
/// fill in audience/tone/constraints later.
#[derive(Serialize)]
pub struct Passport {
    pub goal: String,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub constraints: Vec<String>,
    pub assets: Vec<String>,
    pub next_step: Option<String>,
}

#[derive(Serialize)]
pub struct RouteResponse {
    pub result: &'static str,
    pub tool: Tool,
    pub confidence: f64,
    pub alternatives: Vec<Tool>,
    pub passport: Passport,
    #[serde(rename = "openUrl")]
    pub open_url: String,
    #[serde(rename = "openLabel")]
    pub open_label: String,
}

// Workflow suggestions
#[derive(Deserialize)]
pub struct WorkflowsQuery {
    pub title: Option<String>,
}

// Projects & steps
#[derive(Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
}

#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub steps: Vec<Step>,
    #[serde(rename = "plannedSteps")]
    pub planned_steps: Vec<TaskStep>,
}

#[derive(Deserialize)]
pub struct AddStepRequest {
    #[serde(rename = "type")]
    pub step_type: String,
    pub payload: Value,
}

#[derive(Deserialize)]
pub struct ReorderStepRequest {
    pub dir: Direction,
}

#[derive(Deserialize)]
pub struct SetPlanRequest {
    pub steps: Vec<TaskStep>,
}
