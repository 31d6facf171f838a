use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use switchboard_core::{build_deep_link, route, suggest_workflows};

use super::types::*;
use crate::events::TrackEvent;
use crate::store::Store;

const STEP_TYPES: &[&str] = &["prompt", "decision", "output", "link", "note"];

type ApiResult = (StatusCode, Json<Value>);

fn ok(value: Value) -> ApiResult {
    (StatusCode::OK, Json(value))
}

fn bad_request(message: &str) -> ApiResult {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn not_found(message: &str) -> ApiResult {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
}

fn internal(context: &str, e: anyhow::Error) -> ApiResult {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("{}: {}", context, e) })),
    )
}

fn record(store: &Store, event: TrackEvent) {
    // Analytics failures never fail the request
    if let Err(e) = store.record_event(&event) {
        eprintln!("Warning: failed to record {} event: {}", event.name(), e);
    }
}

pub async fn health_check() -> &'static str {
    "Switchboard is running"
}

pub async fn handle_route(
    State(store): State<Arc<Store>>,
    Json(req): Json<RouteRequest>,
) -> ApiResult {
    let clean = req.prompt.unwrap_or_default().trim().to_string();
    if clean.is_empty() {
        return bad_request("Missing 'prompt' in request body");
    }

    let decision = route(&clean);
    let link = build_deep_link(decision.tool, &clean);

    record(
        &store,
        TrackEvent::ToolRouting {
            tool: decision.tool.tag().to_string(),
            confidence: (decision.confidence * 100.0).round() as u32,
            prompt_length: clean.chars().count(),
        },
    );

    let response = RouteResponse {
        result: "toolcard",
        tool: decision.tool,
        confidence: decision.confidence,
        alternatives: decision.alternatives,
        passport: Passport {
            goal: clean,
            audience: None,
            tone: None,
            constraints: vec![],
            assets: vec![],
            next_step: None,
        },
        open_url: link.url,
        open_label: link.label,
    };
    ok(serde_json::to_value(response).unwrap())
}

// Convenience for visiting /route in a browser
pub async fn handle_route_info() -> ApiResult {
    ok(json!({ "ok": true, "expects": "POST" }))
}

pub async fn handle_workflows(Query(query): Query<WorkflowsQuery>) -> ApiResult {
    let title = query.title.unwrap_or_default().trim().to_string();
    if title.is_empty() {
        return bad_request("Missing or empty 'title' query parameter");
    }
    let workflows = suggest_workflows(&title);
    ok(serde_json::to_value(workflows).unwrap())
}

pub async fn handle_create_project(
    State(store): State<Arc<Store>>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult {
    let title = req.title.trim();
    if title.is_empty() {
        return bad_request("Missing 'title' in request body");
    }
    match store.create_project(title) {
        Ok(project) => {
            record(
                &store,
                TrackEvent::ProjectCreated {
                    project_id: project.id.clone(),
                    project_title: project.title.clone(),
                },
            );
            ok(serde_json::to_value(project).unwrap())
        }
        Err(e) => internal("Failed to create project", e),
    }
}

pub async fn handle_list_projects(State(store): State<Arc<Store>>) -> ApiResult {
    match store.list_projects() {
        Ok(projects) => ok(json!({ "projects": projects })),
        Err(e) => internal("Failed to list projects", e),
    }
}

pub async fn handle_get_project(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> ApiResult {
    let project = match store.get_project(&id) {
        Ok(Some(project)) => project,
        Ok(None) => return not_found("Project not found"),
        Err(e) => return internal("Failed to load project", e),
    };
    let steps = match store.list_steps(&id) {
        Ok(steps) => steps,
        Err(e) => return internal("Failed to load steps", e),
    };
    let planned_steps = match store.planned_steps(&id) {
        Ok(steps) => steps,
        Err(e) => return internal("Failed to load planned steps", e),
    };
    let detail = ProjectDetail {
        project,
        steps,
        planned_steps,
    };
    ok(serde_json::to_value(detail).unwrap())
}

pub async fn handle_update_project(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult {
    if req.title.is_none() && req.notes.is_none() {
        return bad_request("Nothing to update: provide 'title' and/or 'notes'");
    }
    if let Some(title) = &req.title {
        match store.rename_project(&id, title) {
            Ok(true) => {}
            Ok(false) => return not_found("Project not found"),
            Err(e) => return internal("Failed to rename project", e),
        }
    }
    if let Some(notes) = &req.notes {
        match store.update_notes(&id, notes) {
            Ok(true) => {}
            Ok(false) => return not_found("Project not found"),
            Err(e) => return internal("Failed to update notes", e),
        }
    }
    ok(json!({ "ok": true }))
}

pub async fn handle_delete_project(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> ApiResult {
    match store.delete_project(&id) {
        Ok(true) => ok(json!({ "ok": true })),
        Ok(false) => not_found("Project not found"),
        Err(e) => internal("Failed to delete project", e),
    }
}

pub async fn handle_add_step(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
    Json(req): Json<AddStepRequest>,
) -> ApiResult {
    if !STEP_TYPES.contains(&req.step_type.as_str()) {
        return bad_request("Unknown step type");
    }
    match store.add_step(&id, &req.step_type, &req.payload) {
        Ok(Some(step)) => {
            record(
                &store,
                TrackEvent::StepSaved {
                    project_id: id,
                    step_type: step.step_type.clone(),
                    tool: req.payload["tool"]
                        .as_str()
                        .unwrap_or("unknown")
                        .to_string(),
                },
            );
            ok(serde_json::to_value(step).unwrap())
        }
        Ok(None) => not_found("Project not found"),
        Err(e) => internal("Failed to add step", e),
    }
}

pub async fn handle_delete_step(
    State(store): State<Arc<Store>>,
    Path((id, step_id)): Path<(String, String)>,
) -> ApiResult {
    match store.delete_step(&id, &step_id) {
        Ok(true) => ok(json!({ "ok": true })),
        Ok(false) => not_found("Step not found"),
        Err(e) => internal("Failed to delete step", e),
    }
}

pub async fn handle_reorder_step(
    State(store): State<Arc<Store>>,
    Path((id, step_id)): Path<(String, String)>,
    Json(req): Json<ReorderStepRequest>,
) -> ApiResult {
    match store.reorder_step(&id, &step_id, req.dir) {
        Ok(true) => ok(json!({ "ok": true })),
        Ok(false) => not_found("Step not found"),
        Err(e) => internal("Failed to reorder step", e),
    }
}

pub async fn handle_set_plan(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
    Json(req): Json<SetPlanRequest>,
) -> ApiResult {
    match store.set_planned_steps(&id, &req.steps) {
        Ok(true) => ok(json!({ "ok": true, "count": req.steps.len() })),
        Ok(false) => not_found("Project not found"),
        Err(e) => internal("Failed to save plan", e),
    }
}

/// UI-originated events (deep link clicks, workflow step adds).
pub async fn handle_track_event(
    State(store): State<Arc<Store>>,
    Json(event): Json<TrackEvent>,
) -> ApiResult {
    match store.record_event(&event) {
        Ok(()) => ok(json!({ "ok": true })),
        Err(e) => internal("Failed to record event", e),
    }
}
