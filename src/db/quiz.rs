use sqlx::{Pool, Postgres};

use crate::models::quiz::QuizQuestion;

/// Active questions, admin display order. Sampling happens in the core, not
/// here.
pub async fn list_active_questions(pool: &Pool<Postgres>) -> Result<Vec<QuizQuestion>, sqlx::Error> {
    sqlx::query_as::<_, QuizQuestion>(
        r#"
        SELECT id, question, option_1, option_2, option_3, option_4,
            correct_option, is_active, display_order, created_at
        FROM "quiz_question"
        WHERE is_active = TRUE
        ORDER BY display_order, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
