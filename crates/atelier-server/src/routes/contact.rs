use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use atelier_core::{compose_message, whatsapp_url, ContactIntent, ValidationError};

use crate::error::ApiError;
use crate::routes::artworks::WhatsAppResponse;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contact/whatsapp", get(contact_whatsapp))
}

/// Pick the number to message: explicit request, then configuration, then site settings.
pub(crate) async fn resolve_whatsapp_number(
    state: &AppState,
    requested: Option<String>,
) -> Result<String, ApiError> {
    let explicit = requested
        .filter(|n| !n.trim().is_empty())
        .or_else(|| {
            state
                .whatsapp_number
                .clone()
                .filter(|n| !n.trim().is_empty())
        });
    if let Some(number) = explicit {
        return Ok(number);
    }

    let settings = state.content.settings().await?;
    settings
        .as_ref()
        .and_then(|s| s.whatsapp_number())
        .map(str::to_string)
        .ok_or_else(|| ValidationError::MissingPhone.into())
}

#[derive(Deserialize)]
pub struct ContactParams {
    phone: Option<String>,
}

async fn contact_whatsapp(
    State(state): State<AppState>,
    Query(params): Query<ContactParams>,
) -> Result<Json<WhatsAppResponse>, ApiError> {
    let message = compose_message(ContactIntent::General, None)?;
    let phone = resolve_whatsapp_number(&state, params.phone).await?;
    let url = whatsapp_url(&phone, &message)?;

    Ok(Json(WhatsAppResponse { url, message }))
}
