use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};

use super::handlers;
use crate::store::Store;

pub fn create_router() -> Router<Arc<Store>> {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/route", post(handlers::handle_route).get(handlers::handle_route_info))
        .route("/workflows", get(handlers::handle_workflows))
        .route(
            "/projects",
            post(handlers::handle_create_project).get(handlers::handle_list_projects),
        )
        .route(
            "/projects/{id}",
            get(handlers::handle_get_project)
                .patch(handlers::handle_update_project)
                .delete(handlers::handle_delete_project),
        )
        .route("/projects/{id}/steps", post(handlers::handle_add_step))
        .route("/projects/{id}/steps/{step_id}", delete(handlers::handle_delete_step))
        .route(
            "/projects/{id}/steps/{step_id}/reorder",
            post(handlers::handle_reorder_step),
        )
        .route("/projects/{id}/plan", put(handlers::handle_set_plan))
        .route("/events", post(handlers::handle_track_event))
}
