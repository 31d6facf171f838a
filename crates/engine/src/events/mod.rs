use serde::{Deserialize, Serialize};

/// Analytics vocabulary. Events land in the store's events table instead of
/// being fired at a third-party collector.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackEvent {
    ToolRouting {
        tool: String,
        /// Rounded percentage, 0-100.
        confidence: u32,
        prompt_length: usize,
    },
    ProjectCreated {
        project_id: String,
        project_title: String,
    },
    StepSaved {
        project_id: String,
        step_type: String,
        tool: String,
    },
    DeepLinkClick {
        tool: String,
        destination_url: String,
    },
    WorkflowStepAdded {
        tool: String,
        workflow_id: String,
    },
}

impl TrackEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TrackEvent::ToolRouting { .. } => "tool_routing",
            TrackEvent::ProjectCreated { .. } => "project_created",
            TrackEvent::StepSaved { .. } => "step_saved",
            TrackEvent::DeepLinkClick { .. } => "deep_link_click",
            TrackEvent::WorkflowStepAdded { .. } => "workflow_step_added",
        }
    }
}
