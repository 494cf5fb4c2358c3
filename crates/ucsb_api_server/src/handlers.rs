//! Generic record handlers plus the two informational endpoints.
//!
//! Handlers only bind parameters and map errors; the CRUD semantics live in
//! `ucsb_api_core::CrudService`.

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::{Extension, Json};
use log::info;
use serde::Serialize;
use std::collections::HashMap;
use ucsb_api_core::{core_version, service_name, KeyStrategy, Principal, SqlRecord};

type KeyParams = Query<HashMap<String, String>>;

/// `GET {base}/all`
pub async fn list_records<E: SqlRecord>(State(state): State<AppState>) -> Result<Json<Vec<E>>, ApiError> {
    let records = state.with_service::<E, _, _>(|service| service.list()).await?;
    Ok(Json(records))
}

/// `POST {base}/post`, fields bound from the query string.
pub async fn create_record<E: SqlRecord>(
    State(state): State<AppState>,
    params: Result<Query<E>, QueryRejection>,
) -> Result<Json<E>, ApiError> {
    let Query(record) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    if E::KEY_STRATEGY == KeyStrategy::Natural
        && record.key().map_or(true, |key| key.to_string().is_empty())
    {
        return Err(ApiError::BadRequest(format!(
            "missing query parameter `{}`",
            E::KEY_PARAM
        )));
    }
    let created = state
        .with_service::<E, _, _>(move |service| service.create(record))
        .await?;
    info!(
        "event=record_create module=http status=ok entity={} key={}",
        E::ENTITY_NAME,
        key_label(&created)
    );
    Ok(Json(created))
}

/// `GET {base}?<key>=`
pub async fn get_record<E: SqlRecord>(
    State(state): State<AppState>,
    Query(params): KeyParams,
) -> Result<Json<E>, ApiError> {
    let key = parse_key::<E>(&params)?;
    let record = state
        .with_service::<E, _, _>(move |service| service.get(&key))
        .await?;
    Ok(Json(record))
}

/// `PUT {base}?<key>=` with the replacement record as the JSON body.
pub async fn update_record<E: SqlRecord>(
    State(state): State<AppState>,
    Query(params): KeyParams,
    body: Result<Json<E>, JsonRejection>,
) -> Result<Json<E>, ApiError> {
    let key = parse_key::<E>(&params)?;
    let Json(incoming) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let logged_key = key.to_string();
    let updated = state
        .with_service::<E, _, _>(move |service| service.update(&key, incoming))
        .await?;
    info!(
        "event=record_update module=http status=ok entity={} key={}",
        E::ENTITY_NAME,
        logged_key
    );
    Ok(Json(updated))
}

/// `DELETE {base}?<key>=`
pub async fn delete_record<E: SqlRecord>(
    State(state): State<AppState>,
    Query(params): KeyParams,
) -> Result<Json<MessageBody>, ApiError> {
    let key = parse_key::<E>(&params)?;
    let logged_key = key.to_string();
    let message = state
        .with_service::<E, _, _>(move |service| service.delete(&key))
        .await?;
    info!(
        "event=record_delete module=http status=ok entity={} key={}",
        E::ENTITY_NAME,
        logged_key
    );
    Ok(Json(MessageBody { message }))
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// `GET /api/systemInfo`, open to everyone.
pub async fn system_info() -> Json<SystemInfo> {
    Json(SystemInfo {
        name: service_name(),
        version: core_version(),
    })
}

/// `GET /api/currentUser`: the principal attached by the capability guard.
pub async fn current_user(Extension(principal): Extension<Principal>) -> Json<Principal> {
    Json(principal)
}

fn parse_key<E: SqlRecord>(params: &HashMap<String, String>) -> Result<E::Key, ApiError> {
    let raw = params.get(E::KEY_PARAM).ok_or_else(|| {
        ApiError::BadRequest(format!("missing query parameter `{}`", E::KEY_PARAM))
    })?;
    raw.parse::<E::Key>().map_err(|_| {
        ApiError::BadRequest(format!(
            "invalid value for query parameter `{}`: {raw}",
            E::KEY_PARAM
        ))
    })
}

fn key_label<E: SqlRecord>(record: &E) -> String {
    record
        .key()
        .map(|key| key.to_string())
        .unwrap_or_else(|| "-".to_string())
}
