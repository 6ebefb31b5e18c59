use super::error::DirectoryError;
use super::protocol::*;
use super::service::DirectoryService;
use super::types::{Student, StudentId, StudentPatch, ValidationError};

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use std::sync::Arc;

/// All directory routes, sharing one `DirectoryService`.
pub fn router(service: Arc<DirectoryService>) -> Router {
    Router::new()
        .route(ENDPOINT_INDEX, get(handle_index))
        .route(ENDPOINT_GET_STUDENT, get(handle_get_student))
        .route(ENDPOINT_GET_BY_NAME, get(handle_get_by_name))
        .route(ENDPOINT_CREATE, post(handle_create_student))
        .route(ENDPOINT_UPDATE, put(handle_update_student))
        .route(ENDPOINT_DELETE, delete(handle_delete_student))
        .layer(Extension(service))
}

pub async fn handle_index() -> (StatusCode, Json<IndexResponse>) {
    (StatusCode::OK, Json(IndexResponse::greeting()))
}

pub async fn handle_get_student(
    Extension(service): Extension<Arc<DirectoryService>>,
    Path(id_str): Path<String>,
) -> Response {
    let id = match parse_id(&id_str) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.get_by_id(id) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(DirectoryError::NotFound(_)) => {
            tracing::debug!("Student {} not found", id);
            (StatusCode::NOT_FOUND, Json(NotFoundResponse::sentinel())).into_response()
        }
        Err(e @ DirectoryError::OutOfRange { .. }) => {
            tracing::warn!("Rejected view of student {}: {}", id, e);
            reject(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        Err(e) => unexpected(e),
    }
}

pub async fn handle_get_by_name(
    Extension(service): Extension<Arc<DirectoryService>>,
    params: Result<Query<GetByNameParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => {
            tracing::warn!("Rejected get-by-name query: {}", rejection.body_text());
            return reject(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    tracing::debug!("get-by-name name={:?} test={}", params.name, params.test);

    let Some(name) = params.name else {
        return (StatusCode::NOT_FOUND, Json(NotFoundResponse::sentinel())).into_response();
    };

    match service.get_by_name(&name) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(DirectoryError::NameNotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(NotFoundResponse::sentinel())).into_response()
        }
        Err(e) => unexpected(e),
    }
}

pub async fn handle_create_student(
    Extension(service): Extension<Arc<DirectoryService>>,
    Path(id_str): Path<String>,
    body: Result<Json<Student>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id_str) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Json(student) = match body {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!("Rejected student body for {}: {}", id, rejection.body_text());
            return reject(rejection.status(), rejection.body_text());
        }
    };

    match service.create(id, student) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(DirectoryError::Conflict(_)) => {
            tracing::debug!("Student {} exists already", id);
            (StatusCode::CONFLICT, Json(ConflictResponse::sentinel())).into_response()
        }
        Err(e) => unexpected(e),
    }
}

pub async fn handle_update_student(
    Extension(service): Extension<Arc<DirectoryService>>,
    Path(id_str): Path<String>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id_str) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Json(patch) = match body {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!("Rejected patch body for {}: {}", id, rejection.body_text());
            return reject(rejection.status(), rejection.body_text());
        }
    };

    match service.update(id, &patch) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(DirectoryError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(UpdateMissResponse::sentinel())).into_response()
        }
        Err(DirectoryError::Invalid(e)) => {
            tracing::warn!("Rejected patch for {}: {}", id, e);
            reject(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        Err(e) => unexpected(e),
    }
}

pub async fn handle_delete_student(
    Extension(service): Extension<Arc<DirectoryService>>,
    Path(id_str): Path<String>,
) -> Response {
    let id = match parse_id(&id_str) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match service.delete(id) {
        Ok(_) => (StatusCode::OK, Json(DeleteResponse::done())).into_response(),
        Err(DirectoryError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(DeleteMissResponse::sentinel())).into_response()
        }
        Err(e) => unexpected(e),
    }
}

fn parse_id(id_str: &str) -> Result<StudentId, Response> {
    id_str.parse().map_err(|e: ValidationError| {
        tracing::warn!("Failed to parse student id: {}", e);
        reject(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })
}

fn reject(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(DetailResponse::new(detail))).into_response()
}

fn unexpected(err: DirectoryError) -> Response {
    tracing::error!("Unexpected directory outcome: {}", err);
    reject(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
