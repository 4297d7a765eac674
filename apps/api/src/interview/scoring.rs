//! Quiz grading and the improvement tip derived from wrong answers.

use tracing::warn;

use crate::interview::prompts::build_improvement_tip_prompt;
use crate::interview::quiz::QuizQuestion;
use crate::llm_client::{generate_text, TextGenerator};
use crate::models::assessment::QuestionResult;

pub const TIP_WITHOUT_MODEL: &str = "Focus on revising the key concepts behind the questions you missed. Re-read explanations and practice with similar problems.";
pub const TIP_ON_MODEL_FAILURE: &str =
    "Review the relevant topics and practice targeted exercises to strengthen weak areas.";

/// Grades by exact string equality. A missing answer is incorrect.
pub fn grade(questions: &[QuizQuestion], answers: &[Option<String>]) -> Vec<QuestionResult> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let user_answer = answers.get(i).cloned().flatten();
            QuestionResult {
                question: q.question.clone(),
                answer: q.correct_answer.clone(),
                is_correct: user_answer.as_deref() == Some(q.correct_answer.as_str()),
                user_answer,
                explanation: q.explanation.clone(),
            }
        })
        .collect()
}

/// Percentage of correct answers, 0–100.
pub fn score_percent(results: &[QuestionResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let correct = results.iter().filter(|r| r.is_correct).count();
    correct as f64 / results.len() as f64 * 100.0
}

/// Renders the wrong answers as the text block embedded in the tip prompt.
pub fn format_wrong_answers(results: &[QuestionResult]) -> String {
    results
        .iter()
        .filter(|r| !r.is_correct)
        .map(|r| {
            format!(
                "Question: \"{}\"\nCorrect Answer: \"{}\"\nUser Answer: \"{}\"",
                r.question,
                r.answer,
                r.user_answer.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `None` when every answer is correct; otherwise a model tip or a static one.
pub async fn improvement_tip(
    llm: Option<&dyn TextGenerator>,
    industry: &str,
    results: &[QuestionResult],
) -> Option<String> {
    if results.iter().all(|r| r.is_correct) {
        return None;
    }

    let Some(llm) = llm else {
        return Some(TIP_WITHOUT_MODEL.to_string());
    };

    let prompt = build_improvement_tip_prompt(industry, &format_wrong_answers(results));
    match generate_text(llm, &prompt).await {
        Ok(tip) => Some(tip),
        Err(e) => {
            warn!("Improvement tip generation failed: {e}");
            Some(TIP_ON_MODEL_FAILURE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{CannedGenerator, FailingGenerator};

    fn question(q: &str, answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: q.to_string(),
            options: vec![answer.to_string(), "x".into(), "y".into(), "z".into()],
            correct_answer: answer.to_string(),
            explanation: format!("{answer} is right"),
        }
    }

    fn quiz() -> Vec<QuizQuestion> {
        vec![
            question("Which HTTP method is idempotent?", "PUT"),
            question("FIFO structure?", "Queue"),
            question("Filters before grouping?", "WHERE"),
            question("Unauthorized status?", "401"),
        ]
    }

    fn answers(items: &[Option<&str>]) -> Vec<Option<String>> {
        items.iter().map(|a| a.map(String::from)).collect()
    }

    #[test]
    fn test_grade_exact_match_only() {
        let results = grade(
            &quiz(),
            &answers(&[Some("PUT"), Some("queue"), Some("WHERE "), Some("401")]),
        );
        let correct: Vec<bool> = results.iter().map(|r| r.is_correct).collect();
        assert_eq!(correct, vec![true, false, false, true]);
        assert_eq!(results[1].user_answer.as_deref(), Some("queue"));
        assert_eq!(results[1].answer, "Queue");
    }

    #[test]
    fn test_missing_answers_are_wrong() {
        let results = grade(&quiz(), &answers(&[Some("PUT"), None]));
        assert_eq!(results.len(), 4);
        assert!(results[0].is_correct);
        assert!(results[1..].iter().all(|r| !r.is_correct && r.user_answer.is_none()));
        assert!((score_percent(&results) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_percent() {
        let all = grade(&quiz(), &answers(&[Some("PUT"), Some("Queue"), Some("WHERE"), Some("401")]));
        assert!((score_percent(&all) - 100.0).abs() < f64::EPSILON);
        assert_eq!(score_percent(&[]), 0.0);
    }

    #[test]
    fn test_format_wrong_answers_only_includes_misses() {
        let results = grade(
            &quiz(),
            &answers(&[Some("POST"), Some("Queue"), Some("HAVING"), Some("401")]),
        );
        assert_eq!(
            format_wrong_answers(&results),
            "Question: \"Which HTTP method is idempotent?\"\nCorrect Answer: \"PUT\"\nUser Answer: \"POST\"\n\n\
             Question: \"Filters before grouping?\"\nCorrect Answer: \"WHERE\"\nUser Answer: \"HAVING\""
        );
    }

    #[tokio::test]
    async fn test_no_tip_for_perfect_score() {
        let results = grade(&quiz(), &answers(&[Some("PUT"), Some("Queue"), Some("WHERE"), Some("401")]));
        let llm = CannedGenerator("should never be asked");
        assert_eq!(improvement_tip(Some(&llm), "software", &results).await, None);
        assert_eq!(improvement_tip(None, "software", &results).await, None);
    }

    #[tokio::test]
    async fn test_tip_sources() {
        let results = grade(&quiz(), &answers(&[Some("POST")]));

        let llm = CannedGenerator("  Practice HTTP semantics and core data structures.\n");
        assert_eq!(
            improvement_tip(Some(&llm), "software", &results).await.as_deref(),
            Some("Practice HTTP semantics and core data structures.")
        );
        assert_eq!(
            improvement_tip(None, "software", &results).await.as_deref(),
            Some(TIP_WITHOUT_MODEL)
        );
        assert_eq!(
            improvement_tip(Some(&FailingGenerator), "software", &results)
                .await
                .as_deref(),
            Some(TIP_ON_MODEL_FAILURE)
        );
    }
}
