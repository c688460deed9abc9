use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tracing::info;

use crate::{
    db::{
        participation::{find_unused_by_code, mark_code_used},
        prize::get_prize_by_id,
    },
    models::{
        app_state::AppState,
        error::ServerError,
        participation::{DiscountInfo, PromoCodeRequest, RedeemPromoResponse, ValidatePromoResponse},
        prize::PrizeType,
    },
};

pub fn promo_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/validate", post(validate_promo_code))
        .route("/mark-used", post(mark_promo_code_used))
        .with_state(state)
}

/// Invalid codes are a normal response, not a transport error: the checkout
/// flow renders the message inline.
async fn validate_promo_code(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PromoCodeRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let code = request.code.trim().to_uppercase();

    if code.is_empty() {
        return Ok((StatusCode::OK, Json(invalid("Veuillez entrer un code promo"))));
    }

    let Some(participation) = find_unused_by_code(state.get_pool(), &code).await? else {
        return Ok((
            StatusCode::OK,
            Json(invalid("Code promo invalide ou déjà utilisé")),
        ));
    };

    // A stored code whose prize is gone or marked losing is no benefit.
    let prize = match participation.prize_id {
        Some(prize_id) => get_prize_by_id(state.get_pool(), prize_id).await?,
        None => None,
    };
    let Some(prize) = prize.filter(|p| p.is_winning) else {
        return Ok((
            StatusCode::OK,
            Json(invalid("Ce code promo n'est pas valide")),
        ));
    };

    let percent = match prize.prize_type {
        PrizeType::Discount => prize.discount_percent,
        _ => 0,
    };

    let response = ValidatePromoResponse {
        valid: true,
        message: format!("Code valide ! {}", prize.name),
        discount: Some(DiscountInfo {
            kind: prize.prize_type.as_str().to_string(),
            name: prize.name.clone(),
            percent,
            free_delivery: prize.prize_type == PrizeType::FreeDelivery,
            applies_to_fresh_only: prize.applies_to_fresh_only,
        }),
        participation_id: Some(participation.id),
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn mark_promo_code_used(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PromoCodeRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let code = request.code.trim().to_uppercase();

    if code.is_empty() {
        let response = RedeemPromoResponse {
            success: false,
            message: "Code requis".into(),
        };
        return Ok((StatusCode::OK, Json(response)));
    }

    let response = if mark_code_used(state.get_pool(), &code).await? {
        info!("Promo code redeemed: {}", code);
        RedeemPromoResponse {
            success: true,
            message: "Code promo marqué comme utilisé".into(),
        }
    } else {
        RedeemPromoResponse {
            success: false,
            message: "Code non trouvé ou déjà utilisé".into(),
        }
    };

    Ok((StatusCode::OK, Json(response)))
}

fn invalid(message: &str) -> ValidatePromoResponse {
    ValidatePromoResponse {
        valid: false,
        message: message.to_string(),
        discount: None,
        participation_id: None,
    }
}
