use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::prize::GamePrize;

/// Active prizes in wheel layout order. The order is presentation only; the
/// draw over these rows is uniform.
pub async fn list_active_prizes(pool: &Pool<Postgres>) -> Result<Vec<GamePrize>, sqlx::Error> {
    sqlx::query_as::<_, GamePrize>(
        r#"
        SELECT id, name, prize_type, discount_percent, description, color, icon,
            applies_to_fresh_only, is_winning, is_active, display_order, created_at
        FROM "game_prize"
        WHERE is_active = TRUE
        ORDER BY display_order
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_prize_by_id(
    pool: &Pool<Postgres>,
    prize_id: Uuid,
) -> Result<Option<GamePrize>, sqlx::Error> {
    sqlx::query_as::<_, GamePrize>(
        r#"
        SELECT id, name, prize_type, discount_percent, description, color, icon,
            applies_to_fresh_only, is_winning, is_active, display_order, created_at
        FROM "game_prize"
        WHERE id = $1
        "#,
    )
    .bind(prize_id)
    .fetch_optional(pool)
    .await
}
