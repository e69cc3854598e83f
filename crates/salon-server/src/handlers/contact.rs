//! Lead form handler.

use super::{parse_json_body, ApiError};
use crate::server::ContactState;
use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use salon_core::FormRequest;
use serde_json::{json, Value};
use std::sync::Arc;

/// `POST /contact`: render the submitted form and mail it to the dealership.
pub async fn handle_contact(
    State(state): State<Arc<ContactState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let request: FormRequest = parse_json_body(body)?;
    state.notifier.submit(&request).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Email sent successfully"
    })))
}
