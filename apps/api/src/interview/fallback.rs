//! Static question pool sampled when the model cannot produce a quiz.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::interview::quiz::{QuizQuestion, QUIZ_LENGTH};

const DEFAULT_INDUSTRY: &str = "software";

/// Industry used by the parameterized pool item.
pub fn fallback_industry(industry: Option<&str>) -> String {
    industry
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_INDUSTRY)
        .to_lowercase()
}

struct PoolItem {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: &'static str,
    explanation: &'static str,
}

const GENERAL_POOL: &[PoolItem] = &[
    PoolItem {
        question: "Which HTTP method is idempotent?",
        options: ["POST", "PUT", "PATCH", "CONNECT"],
        correct_answer: "PUT",
        explanation: "PUT replaces a resource and is idempotent by definition.",
    },
    PoolItem {
        question: "What is the time complexity of binary search on a sorted array?",
        options: ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
        correct_answer: "O(log n)",
        explanation: "Each step halves the search space.",
    },
    PoolItem {
        question: "Which data structure operates on a FIFO principle?",
        options: ["Stack", "Queue", "Tree", "Graph"],
        correct_answer: "Queue",
        explanation: "Queues process elements First-In-First-Out.",
    },
    PoolItem {
        question: "Which SQL clause filters rows before grouping?",
        options: ["WHERE", "HAVING", "GROUP BY", "ORDER BY"],
        correct_answer: "WHERE",
        explanation: "WHERE filters rows; HAVING filters groups.",
    },
    PoolItem {
        question: "What does ACID stand for in databases?",
        options: [
            "Atomicity, Consistency, Isolation, Durability",
            "Accuracy, Consistency, Isolation, Durability",
            "Atomicity, Concurrency, Integrity, Durability",
            "Availability, Consistency, Isolation, Durability",
        ],
        correct_answer: "Atomicity, Consistency, Isolation, Durability",
        explanation: "ACID are key transaction properties.",
    },
    PoolItem {
        question: "Which HTTP status code represents 'Unauthorized' (no valid credentials)?",
        options: ["400", "401", "403", "404"],
        correct_answer: "401",
        explanation: "401 indicates authentication is required or failed.",
    },
    PoolItem {
        question: "Which of these is a NoSQL database?",
        options: ["PostgreSQL", "MySQL", "MongoDB", "SQLite"],
        correct_answer: "MongoDB",
        explanation: "MongoDB is a document-oriented NoSQL database.",
    },
    PoolItem {
        question: "What does CSS Flexbox primarily control?",
        options: [
            "2D grid layout",
            "One-dimensional layout",
            "Server rendering",
            "Accessibility",
        ],
        correct_answer: "One-dimensional layout",
        explanation: "Flexbox lays out items in a row or column.",
    },
    PoolItem {
        question: "Which JavaScript method creates a shallow copy of an array?",
        options: ["push", "map", "splice", "sort"],
        correct_answer: "map",
        explanation: "map returns a new array without mutating the original.",
    },
    PoolItem {
        question: "What is the purpose of unit testing?",
        options: [
            "Test integrated systems only",
            "Verify individual components in isolation",
            "Measure performance",
            "Deploy automatically",
        ],
        correct_answer: "Verify individual components in isolation",
        explanation: "Unit tests validate small pieces of code independently.",
    },
    PoolItem {
        question: "Which cloud model gives you most control over OS and runtime?",
        options: ["SaaS", "PaaS", "IaaS", "FaaS"],
        correct_answer: "IaaS",
        explanation: "IaaS provides virtualized infrastructure with OS-level control.",
    },
    PoolItem {
        question: "What does 'idempotent' mean in API design?",
        options: [
            "Multiple calls have the same effect as a single call",
            "Calls are always cached",
            "Calls are always asynchronous",
            "Calls must be retried",
        ],
        correct_answer: "Multiple calls have the same effect as a single call",
        explanation: "Idempotent operations can be safely retried.",
    },
    PoolItem {
        question: "Which one is NOT a JavaScript primitive?",
        options: ["string", "number", "object", "boolean"],
        correct_answer: "object",
        explanation: "Objects are reference types; not primitives.",
    },
    PoolItem {
        question: "What does Git 'rebase' do?",
        options: [
            "Combines multiple commits into one",
            "Moves/rewrites commits onto another base",
            "Discards local changes",
            "Creates a new branch",
        ],
        correct_answer: "Moves/rewrites commits onto another base",
        explanation: "Rebase reapplies commits on a new base tip.",
    },
];

impl PoolItem {
    fn to_question(&self) -> QuizQuestion {
        QuizQuestion {
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer.to_string(),
            explanation: self.explanation.to_string(),
        }
    }
}

/// The full pool: one industry-specific item followed by the general items.
pub fn question_pool(industry: &str) -> Vec<QuizQuestion> {
    let mut pool = Vec::with_capacity(GENERAL_POOL.len() + 1);
    pool.push(QuizQuestion {
        question: format!("Which of the following best describes a core design concept in {industry}?"),
        options: vec![
            "Loose coupling".to_string(),
            "Global state everywhere".to_string(),
            "Hidden side-effects".to_string(),
            "No testing needed".to_string(),
        ],
        correct_answer: "Loose coupling".to_string(),
        explanation: "Loose coupling improves maintainability and testability.".to_string(),
    });
    pool.extend(GENERAL_POOL.iter().map(PoolItem::to_question));
    pool
}

/// Samples `QUIZ_LENGTH` distinct questions and shuffles each question's options.
pub fn fallback_quiz<R: Rng + ?Sized>(industry: Option<&str>, rng: &mut R) -> Vec<QuizQuestion> {
    let mut pool = question_pool(&fallback_industry(industry));
    pool.shuffle(rng);
    pool.truncate(QUIZ_LENGTH);
    for question in &mut pool {
        question.options.shuffle(rng);
    }
    pool
}
