use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{error::ServerError, participation::GameParticipation};

/// Fails closed: a match on either the email (case-insensitive) or the phone
/// blocks a new participation.
pub async fn has_already_played(
    pool: &Pool<Postgres>,
    email: &str,
    phone: &str,
) -> Result<bool, sqlx::Error> {
    let email_fut = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM "game_participation" WHERE LOWER(email) = LOWER($1)
        )
        "#,
    )
    .bind(email)
    .fetch_one(pool);

    let phone_fut = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM "game_participation" WHERE phone = $1
        )
        "#,
    )
    .bind(phone)
    .fetch_one(pool);

    let (email_taken, phone_taken) = tokio::join!(email_fut, phone_fut);

    Ok(email_taken? || phone_taken?)
}

pub async fn promo_code_exists(pool: &Pool<Postgres>, code: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM "game_participation" WHERE promo_code = $1
        )
        "#,
    )
    .bind(code)
    .fetch_one(pool)
    .await
}

pub struct NewParticipation<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub quiz_score: i32,
    pub quiz_total: i32,
    pub prize_id: Option<Uuid>,
    pub promo_code: &'a str,
    pub ip_address: Option<String>,
}

/// Insert the one record a submission produces. The unique indexes on email
/// and phone close the eligibility check-then-act race; a violation surfaces
/// as `AlreadyParticipated` instead of a second record.
pub async fn create_participation(
    pool: &Pool<Postgres>,
    record: &NewParticipation<'_>,
) -> Result<Uuid, ServerError> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO "game_participation"
            (id, name, email, phone, quiz_score, quiz_total, prize_id,
             promo_code, has_used_prize, ip_address, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, $9, $10)
        "#,
    )
    .bind(id)
    .bind(record.name)
    .bind(record.email)
    .bind(record.phone)
    .bind(record.quiz_score)
    .bind(record.quiz_total)
    .bind(record.prize_id)
    .bind(record.promo_code)
    .bind(&record.ip_address)
    .bind(created_at)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(id),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(ServerError::AlreadyParticipated)
        }
        Err(e) => Err(e.into()),
    }
}

/// Unconsumed participation holding the given code, if any. Codes are stored
/// uppercase, so the caller normalizes before lookup.
pub async fn find_unused_by_code(
    pool: &Pool<Postgres>,
    code: &str,
) -> Result<Option<GameParticipation>, sqlx::Error> {
    sqlx::query_as::<_, GameParticipation>(
        r#"
        SELECT id, name, email, phone, quiz_score, quiz_total, prize_id,
            promo_code, has_used_prize, ip_address, created_at
        FROM "game_participation"
        WHERE UPPER(promo_code) = $1 AND has_used_prize = FALSE
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}

/// Conditional update so two concurrent redemptions cannot both succeed;
/// the affected-row count is the verdict.
pub async fn mark_code_used(pool: &Pool<Postgres>, code: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE "game_participation"
        SET has_used_prize = TRUE
        WHERE UPPER(promo_code) = $1 AND has_used_prize = FALSE
        "#,
    )
    .bind(code)
    .execute(pool)
    .await?;

    Ok(row.rows_affected() > 0)
}
