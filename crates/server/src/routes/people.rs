use axum::{
    extract::{Path, State},
    Json,
};
use service::errors::ServiceError;
use service::people::Person;
use tracing::warn;

use crate::errors::ApiError;
use crate::extract::LenientJson;
use crate::observability::{PEOPLE_CONFLICTS_TOTAL, PEOPLE_CREATED_TOTAL, PEOPLE_DELETE_REQUESTS_TOTAL};
use crate::state::AppState;

#[utoipa::path(get, path = "/people", tag = "people", responses((status = 200, description = "All people in insertion order", body = [crate::openapi::PersonDoc])))]
pub async fn list_people(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.people.list().await)
}

#[utoipa::path(
    get, path = "/people/{id}", tag = "people",
    params(("id" = String, Path, description = "Person id")),
    responses(
        (status = 200, description = "The person; `{}` for an unknown id when strict_not_found is off", body = crate::openapi::PersonDoc),
        (status = 404, description = "Unknown id", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    match state.people.get(&id).await {
        Ok(person) => Ok(Json(person)),
        Err(ServiceError::NotFound(_)) if !state.strict_not_found => Ok(Json(Person::default())),
        Err(e) => Err(e.into()),
    }
}

/// The path id wins over any id in the body; an unreadable body creates a
/// record with only the id set.
#[utoipa::path(
    post, path = "/people/{id}", tag = "people",
    params(("id" = String, Path, description = "Person id")),
    request_body = crate::openapi::PersonDoc,
    responses(
        (status = 200, description = "All people after the insert", body = [crate::openapi::PersonDoc]),
        (status = 409, description = "Id already taken", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    LenientJson(payload): LenientJson<Person>,
) -> Result<Json<Vec<Person>>, ApiError> {
    match state.people.create(&id, payload).await {
        Ok(people) => {
            PEOPLE_CREATED_TOTAL.inc();
            Ok(Json(people))
        }
        Err(e) => {
            if matches!(e, ServiceError::AlreadyExists(_)) {
                PEOPLE_CONFLICTS_TOTAL.inc();
            }
            warn!(person_id = %id, error = %e, "create person rejected");
            Err(e.into())
        }
    }
}

#[utoipa::path(
    delete, path = "/people/{id}", tag = "people",
    params(("id" = String, Path, description = "Person id")),
    responses((status = 200, description = "All people after the removal", body = [crate::openapi::PersonDoc]))
)]
pub async fn delete_person(State(state): State<AppState>, Path(id): Path<String>) -> Json<Vec<Person>> {
    PEOPLE_DELETE_REQUESTS_TOTAL.inc();
    Json(state.people.delete(&id).await)
}
