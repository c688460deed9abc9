use rand::{Rng, seq::IndexedRandom};

use crate::models::quiz::{AnswerMap, QuizQuestion};

#[derive(Debug, PartialEq)]
pub struct QuizScore {
    pub score: i32,
    pub total: i32,
}

/// Sample `count` questions without replacement. Callers get the whole pool
/// back when it holds fewer than `count` entries.
pub fn draw_questions<'a, R: Rng>(
    pool: &'a [QuizQuestion],
    count: usize,
    rng: &mut R,
) -> Vec<&'a QuizQuestion> {
    pool.choose_multiple(rng, count).collect()
}

/// Score submitted answers against the question set used for the session.
/// Answers referencing unknown question ids are ignored. An empty submission
/// still reports `default_total` as the denominator so the result never
/// displays as 0/0.
pub fn score_answers(
    questions: &[QuizQuestion],
    answers: &AnswerMap,
    default_total: i32,
) -> QuizScore {
    let mut score = 0;
    let mut total = 0;

    for (question_id, selected) in answers {
        let Some(question) = questions.iter().find(|q| q.id == *question_id) else {
            continue;
        };

        total += 1;
        if *selected == question.correct_index() {
            score += 1;
        }
    }

    let total = if total == 0 { default_total } else { total };
    QuizScore { score, total }
}

/// Four score tiers: perfect, >= 75%, >= 50%, below.
pub fn score_message(name: &str, score: i32, total: i32) -> String {
    if score == total {
        format!("Parfait {} ! Score parfait de {}/{} ! 🎉", name, score, total)
    } else if score * 4 >= total * 3 {
        format!("Bravo {} ! Excellent score de {}/{} ! 👏", name, score, total)
    } else if score * 2 >= total {
        format!("Bien joué {} ! Vous avez obtenu {}/{}. 👍", name, score, total)
    } else {
        format!(
            "Merci {} ! Vous avez obtenu {}/{}. Vous pouvez faire mieux ! 💪",
            name, score, total
        )
    }
}
