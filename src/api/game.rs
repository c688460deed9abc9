use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::{
    api::validation::{ValidatedJson, validate_person_name, validate_phone, validation_rejection},
    config::app_config::CONFIG,
    db::{
        participation::{NewParticipation, create_participation, has_already_played},
        prize::list_active_prizes,
        quiz::list_active_questions,
    },
    models::{
        app_state::AppState,
        error::ServerError,
        participation::{
            EligibilityRequest, EligibilityResponse, PrizeSummary, SubmitGameRequest,
            SubmitGameResponse,
        },
        prize::{WheelSegment, WheelSegmentsResponse},
        quiz::{ClientQuestion, QuizQuestionsResponse},
    },
    service::{
        promo::mint_unique_code,
        quiz::{draw_questions, score_answers, score_message},
        wheel::spin,
    },
};

pub fn game_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/check-eligibility", post(check_eligibility))
        .route("/questions", get(get_quiz_questions))
        .route("/submit", post(submit_quiz_and_spin))
        .route("/wheel-segments", get(get_wheel_segments))
        .with_state(state)
}

async fn check_eligibility(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EligibilityRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let email = request.email.trim().to_lowercase();
    let phone = request.phone.trim().to_string();

    if email.is_empty() || phone.is_empty() {
        let response = EligibilityResponse {
            eligible: false,
            message: "Email et téléphone requis".into(),
        };
        return Ok((StatusCode::OK, Json(response)));
    }

    let response = if has_already_played(state.get_pool(), &email, &phone).await? {
        EligibilityResponse {
            eligible: false,
            message:
                "Vous avez déjà participé au jeu. Une seule participation par personne est autorisée."
                    .into(),
        }
    } else {
        EligibilityResponse {
            eligible: true,
            message: "Vous pouvez participer !".into(),
        }
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn get_quiz_questions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let stored = list_active_questions(state.get_pool()).await?;

    let pool = if stored.is_empty() {
        debug!("No active questions configured, serving the bundled set");
        &state.game_defaults().questions
    } else {
        &stored
    };

    let mut rng = ChaCha8Rng::from_os_rng();
    let selected = draw_questions(pool, CONFIG.game.questions_per_session, &mut rng);

    let questions: Vec<ClientQuestion> = selected.into_iter().map(ClientQuestion::from).collect();
    let total = questions.len();

    Ok((StatusCode::OK, Json(QuizQuestionsResponse { questions, total })))
}

async fn submit_quiz_and_spin(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<SubmitGameRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let name = request.name.trim().to_string();
    let email = request.email.trim().to_lowercase();
    let phone = request.phone.trim().to_string();

    validate_person_name(&name).map_err(validation_rejection)?;
    validate_phone(&phone).map_err(validation_rejection)?;

    // Defense in depth: the client already called check-eligibility, but the
    // store may have changed since.
    if has_already_played(state.get_pool(), &email, &phone).await? {
        return Err(ServerError::AlreadyParticipated);
    }

    let stored_questions = list_active_questions(state.get_pool()).await?;
    let questions = if stored_questions.is_empty() {
        &state.game_defaults().questions
    } else {
        &stored_questions
    };

    let result = score_answers(
        questions,
        &request.answers,
        CONFIG.game.questions_per_session as i32,
    );

    let prizes = list_active_prizes(state.get_pool()).await?;
    let mut rng = ChaCha8Rng::from_os_rng();
    let outcome = spin(&prizes, &mut rng);

    let promo_code = if outcome.is_winning {
        mint_unique_code(
            state.get_pool(),
            &CONFIG.game.promo_prefix,
            CONFIG.game.promo_suffix_length,
            CONFIG.game.promo_mint_attempts,
        )
        .await?
    } else {
        String::new()
    };

    let record = NewParticipation {
        name: &name,
        email: &email,
        phone: &phone,
        quiz_score: result.score,
        quiz_total: result.total,
        prize_id: outcome.prize_id,
        promo_code: &promo_code,
        ip_address: Some(client_ip(&headers, addr)),
    };
    let participation_id = create_participation(state.get_pool(), &record).await?;

    info!(
        "Participation {} recorded: {}/{}, prize '{}', winning: {}",
        participation_id, result.score, result.total, outcome.name, outcome.is_winning
    );

    let response = SubmitGameResponse {
        success: true,
        quiz_score: result.score,
        quiz_total: result.total,
        score_message: score_message(&name, result.score, result.total),
        prize: PrizeSummary {
            code: outcome.code,
            name: outcome.name,
            won: outcome.is_winning,
            discount_percent: outcome.discount_percent,
            applies_to_fresh_only: outcome.applies_to_fresh_only,
        },
        promo_code,
    };

    Ok((StatusCode::OK, Json(response)))
}

async fn get_wheel_segments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let prizes = list_active_prizes(state.get_pool()).await?;

    let segments: Vec<WheelSegment> = if prizes.is_empty() {
        state.game_defaults().segments.clone()
    } else {
        prizes.iter().map(WheelSegment::from).collect()
    };

    let total = segments.len();
    Ok((StatusCode::OK, Json(WheelSegmentsResponse { segments, total })))
}

/// First X-Forwarded-For entry when present, else the peer address.
fn client_ip(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}
