use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{
    error::ServerError,
    leads::{ContactStatus, CreateContactRequest, CreateQuoteRequest, NewsletterRequest, QuoteStatus},
};

pub async fn create_quote_request(
    pool: &Pool<Postgres>,
    request: &CreateQuoteRequest,
) -> Result<Uuid, ServerError> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let row = sqlx::query(
        r#"
        INSERT INTO "quote_request"
            (id, first_name, last_name, email, phone, company, city, address,
             project_size, surface_area, budget_range, timeline, description,
             has_water_source, has_electricity, needs_training, needs_maintenance,
             status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
        "#,
    )
    .bind(id)
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.company)
    .bind(&request.city)
    .bind(&request.address)
    .bind(&request.project_size)
    .bind(&request.surface_area)
    .bind(&request.budget_range)
    .bind(&request.timeline)
    .bind(&request.description)
    .bind(request.has_water_source)
    .bind(request.has_electricity)
    .bind(request.needs_training)
    .bind(request.needs_maintenance)
    .bind(QuoteStatus::Pending)
    .bind(created_at)
    .execute(pool)
    .await?;

    if row.rows_affected() == 0 {
        return Err(ServerError::Internal("Failed to persist quote request".into()));
    }

    Ok(id)
}

pub async fn create_contact_message(
    pool: &Pool<Postgres>,
    request: &CreateContactRequest,
) -> Result<Uuid, ServerError> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let row = sqlx::query(
        r#"
        INSERT INTO "contact_message" (id, name, email, phone, subject, message, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.subject)
    .bind(&request.message)
    .bind(ContactStatus::New)
    .bind(created_at)
    .execute(pool)
    .await?;

    if row.rows_affected() == 0 {
        return Err(ServerError::Internal("Failed to persist contact message".into()));
    }

    Ok(id)
}

/// Get-or-create semantics: resubscribing an existing address succeeds
/// without touching the stored row.
pub async fn subscribe_newsletter(
    pool: &Pool<Postgres>,
    request: &NewsletterRequest,
) -> Result<(), ServerError> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO "newsletter" (id, email, is_active, created_at)
        VALUES ($1, $2, TRUE, $3)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(id)
    .bind(&request.email)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(())
}
