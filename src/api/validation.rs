use axum::{Json, extract::FromRequest, http::StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use validator::{Validate, ValidationError};

use crate::models::error::ServerError;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send + 'static,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ServerError::Api(StatusCode::BAD_REQUEST, "Invalid JSON".to_string()))?;

        if !content_type.starts_with("application/json") {
            return Err(ServerError::Api(
                StatusCode::BAD_REQUEST,
                "Expected JSON".to_string(),
            ));
        }

        let value = match Json::<T>::from_request(req, state).await {
            Ok(Json(val)) => val,
            Err(_) => {
                return Err(ServerError::Api(
                    StatusCode::BAD_REQUEST,
                    "Invalid JSON".into(),
                ));
            }
        };

        match value.validate() {
            Ok(_) => {
                debug!("Validation passed");
                Ok(ValidatedJson(value))
            }
            Err(e) => {
                let error_msg = format_validation_errors(&e);
                info!("Validation error: {}", error_msg);
                Err(ServerError::Api(StatusCode::BAD_REQUEST, error_msg))
            }
        }
    }
}

/// Format validation errors into a user-friendly message
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let msg = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} validation failed", field));
            messages.push(msg);
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join(", ")
    }
}

/// Map a single failed check to the 400 the extractor would have produced.
pub fn validation_rejection(error: ValidationError) -> ServerError {
    let msg = error
        .message
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Validation failed".to_string());
    ServerError::Api(StatusCode::BAD_REQUEST, msg)
}

/// Validate person name: 1-100 chars, letters, spaces, and common name chars
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().len();

    if len == 0 {
        return Err(
            ValidationError::new("name_empty").with_message("Le nom est requis".into())
        );
    }

    if len > 100 {
        return Err(ValidationError::new("name_too_long")
            .with_message("Le nom doit contenir au plus 100 caractères".into()));
    }

    if !name
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '\'' || c == '-' || c == '.')
    {
        return Err(ValidationError::new("name_invalid_chars").with_message(
            "Le nom ne peut contenir que des lettres, espaces, tirets, apostrophes et points"
                .into(),
        ));
    }

    Ok(())
}

/// Validate phone: 7-20 chars, digits plus common separators, optional leading +
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    let len = trimmed.len();

    if len < 7 || len > 20 {
        return Err(ValidationError::new("phone_invalid_length")
            .with_message("Le numéro de téléphone doit contenir entre 7 et 20 caractères".into()));
    }

    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 7 {
        return Err(ValidationError::new("phone_too_few_digits")
            .with_message("Le numéro de téléphone doit contenir au moins 7 chiffres".into()));
    }

    if !trimmed
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || c == ' ' || c == '-' || c == '.' || (c == '+' && i == 0))
    {
        return Err(ValidationError::new("phone_invalid_chars")
            .with_message("Le numéro de téléphone contient des caractères invalides".into()));
    }

    Ok(())
}
