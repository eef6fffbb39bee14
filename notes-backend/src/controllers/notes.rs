//! Notes REST API
//!
//! `/api/notes` addresses the whole collection, `/api/notes/{id}` a single note.
//! Every handler makes exactly one store call. Writes answer `success` whether
//! the store applied them or skipped them (blank title, unknown id).

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::models::{Note, NotePayload};
use crate::AppState;

pub const REQUEST_PATH: &str = "/api/notes";

const RESPONSE_SUCCESS: &str = "success";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(REQUEST_PATH)
            .route(web::get().to(list_notes))
            .route(web::post().to(create_note))
            .default_service(web::to(method_not_allowed)),
    );
    cfg.service(
        web::resource(format!("{}/{{id}}", REQUEST_PATH))
            .route(web::get().to(get_note))
            .route(web::put().to(update_note))
            .route(web::delete().to(delete_note))
            .default_service(web::to(method_not_allowed)),
    );
}

/// `{"result": [...]}`, or `{}` when there are no notes
#[derive(Debug, Serialize)]
struct ListNotesResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    result: Vec<Note>,
}

/// The note itself, or `{}` when it does not exist
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GetNoteResponse {
    Found(Note),
    NotFound {},
}

impl From<Option<Note>> for GetNoteResponse {
    fn from(note: Option<Note>) -> Self {
        match note {
            Some(note) => GetNoteResponse::Found(note),
            None => GetNoteResponse::NotFound {},
        }
    }
}

/// List every note
async fn list_notes(data: web::Data<AppState>) -> Result<HttpResponse> {
    let notes = data.store.get_all()?;
    json_response(&ListNotesResponse { result: notes })
}

/// Get a single note by id
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = parse_note_id(&path)?;
    let note = data.store.get(id)?;
    json_response(&GetNoteResponse::from(note))
}

/// Create a note from `{"title", "content"}`
async fn create_note(data: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let mut note = parse_payload(&body)?.into_new_note();
    let outcome = data.store.add(&mut note)?;
    log::debug!("[NOTES] add -> {} (id {})", outcome.as_str(), note.id);
    Ok(success_response())
}

/// Replace title and content of the note at the path id
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let id = parse_note_id(&path)?;
    let mut note = parse_payload(&body)?.into_note_with_id(id);
    let outcome = data.store.update(&mut note)?;
    log::debug!("[NOTES] update {} -> {}", id, outcome.as_str());
    Ok(success_response())
}

async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = parse_note_id(&path)?;
    let outcome = data.store.delete(id)?;
    log::debug!("[NOTES] delete {} -> {}", id, outcome.as_str());
    Ok(success_response())
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().finish()
}

/// Parse the trailing path segment as a non-negative note id
fn parse_note_id(raw: &str) -> Result<i64> {
    let invalid = || ApiError::malformed(format!("invalid note id {:?}", raw));
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<i64>().map_err(|_| invalid())
}

/// Parse a request body that must be a JSON object
fn parse_payload(body: &[u8]) -> Result<NotePayload> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::malformed(format!("invalid JSON body: {}", e)))?;
    if !value.is_object() {
        return Err(ApiError::malformed("request body must be a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| ApiError::malformed(format!("invalid note: {}", e)))
}

fn json_response<T: Serialize>(body: &T) -> Result<HttpResponse> {
    let mut encoded = serde_json::to_string(body)?;
    encoded.push('\n');
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(encoded))
}

fn success_response() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("{}\n", RESPONSE_SUCCESS))
}
