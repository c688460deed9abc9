use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::quiz::AnswerMap;

/// One completed play session. Created exactly once per submission; only the
/// `has_used_prize` flag ever changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameParticipation {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub quiz_score: i32,
    pub quiz_total: i32,
    pub prize_id: Option<Uuid>,
    pub promo_code: String,
    pub has_used_prize: bool,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct EligibilityRequest {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    pub eligible: bool,
    pub message: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitGameRequest {
    #[validate(length(min = 1, max = 100, message = "Le nom est requis"))]
    pub name: String,
    #[validate(email(message = "Adresse email invalide"))]
    pub email: String,
    #[validate(length(min = 7, max = 20, message = "Numéro de téléphone invalide"))]
    pub phone: String,
    #[serde(default)]
    pub answers: AnswerMap,
}

#[derive(Debug, Serialize)]
pub struct PrizeSummary {
    pub code: String,
    pub name: String,
    pub won: bool,
    pub discount_percent: i32,
    pub applies_to_fresh_only: bool,
}

#[derive(Debug, Serialize)]
pub struct SubmitGameResponse {
    pub success: bool,
    pub quiz_score: i32,
    pub quiz_total: i32,
    pub score_message: String,
    pub prize: PrizeSummary,
    pub promo_code: String,
}

#[derive(Debug, Deserialize)]
pub struct PromoCodeRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct DiscountInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub percent: i32,
    pub free_delivery: bool,
    pub applies_to_fresh_only: bool,
}

#[derive(Debug, Serialize)]
pub struct ValidatePromoResponse {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct RedeemPromoResponse {
    pub success: bool,
    pub message: String,
}
