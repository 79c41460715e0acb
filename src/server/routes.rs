use crate::core::query::{self, BSIS, BSIT};
use crate::server::{ApiError, SharedCatalog};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

pub fn catalog_routes() -> Router<SharedCatalog> {
    Router::new()
        .route("/", get(root))
        .route("/api/courses/bsis", get(bsis_courses))
        .route("/api/courses/bsit", get(bsit_courses))
        .route("/api/backend-courses", get(backend_courses))
        .route("/api/course-details", get(course_details))
}

fn json_response<T: Serialize>(body: T) -> Result<Json<Value>, ApiError> {
    Ok(Json(serde_json::to_value(body)?))
}

async fn root() -> &'static str {
    "Hello World!"
}

async fn bsis_courses(State(catalog): State<SharedCatalog>) -> Result<Json<Value>, ApiError> {
    json_response(query::by_program_tag(&catalog, BSIS))
}

async fn bsit_courses(State(catalog): State<SharedCatalog>) -> Result<Json<Value>, ApiError> {
    json_response(query::by_program_tag(&catalog, BSIT))
}

async fn backend_courses(State(catalog): State<SharedCatalog>) -> Result<Json<Value>, ApiError> {
    json_response(query::backend_courses_sorted(&catalog))
}

async fn course_details(State(catalog): State<SharedCatalog>) -> Result<Json<Value>, ApiError> {
    json_response(query::course_details(&catalog))
}
