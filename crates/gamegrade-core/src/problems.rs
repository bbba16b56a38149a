//! Random arithmetic problem generation.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::Difficulty;

/// The four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Apply the operation. Division is exact integer division; `None` on a
    /// zero divisor or a remainder.
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
            Operation::Divide => (b != 0 && a % b == 0).then(|| a / b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A generated practice problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathProblem {
    pub question: String,
    pub left: i64,
    pub right: i64,
    pub answer: i64,
    pub operation: Operation,
    pub difficulty: Difficulty,
}

/// Difficulty by answer size: below 20 is easy, below 100 medium.
pub fn classify_answer(answer: i64) -> Difficulty {
    if answer < 20 {
        Difficulty::Easy
    } else if answer < 100 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Draw operands for `op` so the answer is a non-negative integer.
pub fn draw_operands<R: Rng + ?Sized>(rng: &mut R, op: Operation) -> (i64, i64, i64) {
    match op {
        Operation::Add => {
            let (a, b) = (rng.gen_range(1..=50), rng.gen_range(1..=50));
            (a, b, a + b)
        }
        Operation::Subtract => {
            let a = rng.gen_range(10..=50);
            let b = rng.gen_range(1..=a);
            (a, b, a - b)
        }
        Operation::Multiply => {
            let (a, b) = (rng.gen_range(2..=12), rng.gen_range(2..=12));
            (a, b, a * b)
        }
        Operation::Divide => {
            let answer = rng.gen_range(2..=12);
            let b = rng.gen_range(2..=12);
            (answer * b, b, answer)
        }
    }
}

pub fn generate_problem<R: Rng + ?Sized>(rng: &mut R) -> MathProblem {
    let operation = *Operation::ALL.choose(rng).unwrap_or(&Operation::Add);
    let (left, right, answer) = draw_operands(rng, operation);
    MathProblem {
        question: format!("{left} {operation} {right} = ?"),
        left,
        right,
        answer,
        operation,
        difficulty: classify_answer(answer),
    }
}

pub fn generate_problems<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<MathProblem> {
    (0..count).map(|_| generate_problem(rng)).collect()
}
