use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin-managed quiz question. The stored answer is 1-based, the index
/// shipped to and received from clients is 0-based.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub question: String,
    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
    pub option_4: String,
    pub correct_option: i32,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl QuizQuestion {
    pub fn options(&self) -> [&str; 4] {
        [
            &self.option_1,
            &self.option_2,
            &self.option_3,
            &self.option_4,
        ]
    }

    pub fn correct_index(&self) -> i32 {
        self.correct_option - 1
    }
}

/// Question shape exposed to players, without the answer.
#[derive(Debug, Serialize)]
pub struct ClientQuestion {
    pub id: Uuid,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for ClientQuestion {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            options: q.options().map(str::to_string).to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionsResponse {
    pub questions: Vec<ClientQuestion>,
    pub total: usize,
}

/// Answers submitted for one session, question id to selected 0-based index.
pub type AnswerMap = HashMap<Uuid, i32>;
