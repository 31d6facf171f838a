pub mod catalog;
pub mod links;
pub mod macros;
pub mod router;
pub mod schemas;
pub mod workflow;

pub use catalog::Tool;
pub use links::build_deep_link;
pub use router::route;
pub use schemas::{DeepLink, RouteDecision, StepTemplate, TaskStep, Workflow};
pub use workflow::suggest_workflows;
