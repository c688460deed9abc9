use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::json;
use tracing::info;

use crate::{
    api::validation::{ValidatedJson, validate_phone, validation_rejection},
    db::leads::{create_contact_message, create_quote_request, subscribe_newsletter},
    models::{
        app_state::AppState,
        error::ServerError,
        leads::{CreateContactRequest, CreateQuoteRequest, NewsletterRequest},
    },
};

pub fn lead_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quote-request", post(submit_quote_request))
        .route("/contact", post(submit_contact_message))
        .route("/newsletter", post(newsletter_subscribe))
        .with_state(state)
}

async fn submit_quote_request(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateQuoteRequest>,
) -> Result<impl IntoResponse, ServerError> {
    validate_phone(&request.phone).map_err(validation_rejection)?;

    let quote_id = create_quote_request(state.get_pool(), &request).await?;

    // Confirmation/notification mail belongs to an external collaborator and
    // must never affect the success response.
    info!(
        "Quote request {} from {} {} <{}>",
        quote_id, request.first_name, request.last_name, request.email
    );

    let response = json!({
        "success": true,
        "message": "Votre demande de devis a été envoyée avec succès. Nous vous contacterons sous 48h.",
        "quote_id": quote_id,
    });

    Ok((StatusCode::CREATED, Json(response)))
}

async fn submit_contact_message(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let message_id = create_contact_message(state.get_pool(), &request).await?;

    info!("Contact message {} from {}", message_id, request.email);

    let response = json!({
        "success": true,
        "message": "Votre message a été envoyé avec succès. Nous vous répondrons dans les plus brefs délais.",
    });

    Ok((StatusCode::CREATED, Json(response)))
}

async fn newsletter_subscribe(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<NewsletterRequest>,
) -> Result<impl IntoResponse, ServerError> {
    subscribe_newsletter(state.get_pool(), &request).await?;

    let response = json!({
        "success": true,
        "message": "Vous êtes maintenant inscrit à notre newsletter.",
    });

    Ok((StatusCode::CREATED, Json(response)))
}
