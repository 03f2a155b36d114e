//! CRUD endpoints over the person store.
//!
//! None of these fail in the default mode: a missing record is an empty
//! shell and an unreadable body is a zero-value person.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::{Person, PersonBody};

/// `GET /personnes`
pub async fn list_personnes(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.store.list().await)
}

/// `GET /personnes/{id}`
pub async fn get_personne(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Person> {
    match state.store.find(&id).await {
        Some(person) => Json(person),
        None => {
            tracing::debug!(id = %id, "No person with this id, answering empty shell");
            Json(Person::default())
        }
    }
}

/// `POST /personnes/{id}`
pub async fn create_personne(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Vec<Person>>, ApiError> {
    let mut person = match PersonBody::decode(&body) {
        PersonBody::Parsed(person) => person,
        PersonBody::Empty => Person::default(),
        PersonBody::Malformed(e) if state.strict_mode => {
            tracing::warn!(id = %id, error = %e, "Rejecting malformed person body");
            return Err(ApiError::UnprocessableBody(e));
        }
        PersonBody::Malformed(e) => {
            tracing::warn!(id = %id, error = %e, "Malformed person body, storing zero value");
            Person::default()
        }
    };
    person.id = id;

    tracing::info!(id = %person.id, "Person created");
    Ok(Json(state.store.append(person).await))
}

/// `DELETE /personnes/{id}`
pub async fn delete_personne(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Person>> {
    let (removed, records) = state.store.remove_first(&id).await;
    if removed.is_some() {
        tracing::info!(id = %id, "Person deleted");
    } else {
        tracing::debug!(id = %id, "Nothing to delete");
    }
    Json(records)
}
