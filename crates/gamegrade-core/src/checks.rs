//! Game-logic checks: grid validity, equation puzzles, and seeded play
//! simulations.
//!
//! Every check that needs randomness takes the generator as an argument so a
//! fixed seed reproduces a run exactly.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::problems::{generate_problem, Operation};

// ---------------------------------------------------------------------------
// Sudoku
// ---------------------------------------------------------------------------

/// A solved 4x4 grid used by the check suite.
pub const SAMPLE_GRID: [[u8; 4]; 4] = [[1, 2, 3, 4], [3, 4, 1, 2], [2, 1, 4, 3], [4, 3, 2, 1]];

fn all_distinct<I: IntoIterator<Item = u8>>(values: I, n: usize) -> bool {
    let set: HashSet<u8> = values.into_iter().collect();
    set.len() == n
}

/// Check that every row and column of an n×n grid holds n distinct values,
/// and every box too when n is a perfect square.
pub fn is_valid_sudoku<R: AsRef<[u8]>>(grid: &[R]) -> bool {
    let n = grid.len();
    if n == 0 || grid.iter().any(|row| row.as_ref().len() != n) {
        return false;
    }

    if !grid.iter().all(|row| all_distinct(row.as_ref().iter().copied(), n)) {
        return false;
    }

    if !(0..n).all(|col| all_distinct(grid.iter().map(|row| row.as_ref()[col]), n)) {
        return false;
    }

    let side = (n as f64).sqrt() as usize;
    if side * side != n {
        return true;
    }

    (0..n).step_by(side).all(|top| {
        (0..n).step_by(side).all(|left| {
            let cells = (top..top + side)
                .flat_map(|r| (left..left + side).map(move |c| (r, c)))
                .map(|(r, c)| grid[r].as_ref()[c]);
            all_distinct(cells, n)
        })
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SudokuOutcome {
    pub valid: bool,
    pub grid_size: usize,
}

pub fn check_sudoku<R: AsRef<[u8]>>(grid: &[R]) -> SudokuOutcome {
    SudokuOutcome {
        valid: is_valid_sudoku(grid),
        grid_size: grid.len(),
    }
}

// ---------------------------------------------------------------------------
// CrossMath
// ---------------------------------------------------------------------------

/// One side of a CrossMath equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Var(char),
    Const(i64),
}

impl Term {
    fn value(self, solution: &BTreeMap<char, i64>) -> Option<i64> {
        match self {
            Term::Var(v) => solution.get(&v).copied(),
            Term::Const(c) => Some(c),
        }
    }
}

/// `left op right = result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub left: Term,
    pub op: Operation,
    pub right: Term,
    pub result: Term,
}

impl Equation {
    pub fn new(left: Term, op: Operation, right: Term, result: Term) -> Self {
        Self {
            left,
            op,
            right,
            result,
        }
    }

    /// `None` while any variable is unassigned.
    pub fn holds(&self, solution: &BTreeMap<char, i64>) -> Option<bool> {
        let l = self.left.value(solution)?;
        let r = self.right.value(solution)?;
        let z = self.result.value(solution)?;
        Some(self.op.apply(l, r) == Some(z))
    }

    fn unknowns(&self, solution: &BTreeMap<char, i64>) -> BTreeSet<char> {
        [self.left, self.right, self.result]
            .into_iter()
            .filter_map(|t| match t {
                Term::Var(v) if !solution.contains_key(&v) => Some(v),
                _ => None,
            })
            .collect()
    }

    /// Solve for the unassigned position when exactly one term is unknown.
    fn solve_single(&self, solution: &BTreeMap<char, i64>) -> Option<(char, Option<i64>)> {
        let known = |t: Term| t.value(solution);
        match (known(self.left), known(self.right), known(self.result)) {
            (Some(l), Some(r), None) => {
                let Term::Var(v) = self.result else { return None };
                Some((v, self.op.apply(l, r)))
            }
            (None, Some(r), Some(z)) => {
                let Term::Var(v) = self.left else { return None };
                let value = match self.op {
                    Operation::Add => z.checked_sub(r),
                    Operation::Subtract => z.checked_add(r),
                    Operation::Multiply => Operation::Divide.apply(z, r),
                    Operation::Divide => z.checked_mul(r),
                };
                Some((v, value))
            }
            (Some(l), None, Some(z)) => {
                let Term::Var(v) = self.right else { return None };
                let value = match self.op {
                    Operation::Add => z.checked_sub(l),
                    Operation::Subtract => l.checked_sub(z),
                    Operation::Multiply => Operation::Divide.apply(z, l),
                    Operation::Divide => Operation::Divide.apply(l, z),
                };
                Some((v, value))
            }
            _ => None,
        }
    }
}

/// A system of CrossMath equations over single-letter variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossMath {
    pub equations: Vec<Equation>,
}

impl CrossMath {
    pub fn new(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    /// The built-in puzzle: A+B=15, C-D=3, 12+8=E, A+C=12, B-D=6.
    pub fn reference() -> Self {
        Self::with_last_difference(6)
    }

    /// The reference puzzle with `B - D = last`. Only 6 is solvable.
    pub fn with_last_difference(last: i64) -> Self {
        use Term::{Const, Var};
        Self::new(vec![
            Equation::new(Var('A'), Operation::Add, Var('B'), Const(15)),
            Equation::new(Var('C'), Operation::Subtract, Var('D'), Const(3)),
            Equation::new(Const(12), Operation::Add, Const(8), Var('E')),
            Equation::new(Var('A'), Operation::Add, Var('C'), Const(12)),
            Equation::new(Var('B'), Operation::Subtract, Var('D'), Const(last)),
        ])
    }

    /// The hand-checked answer to [`CrossMath::reference`].
    pub fn reference_solution() -> BTreeMap<char, i64> {
        [('A', 6), ('B', 9), ('C', 6), ('D', 3), ('E', 20)].into_iter().collect()
    }

    pub fn variables(&self) -> BTreeSet<char> {
        self.equations
            .iter()
            .flat_map(|e| [e.left, e.right, e.result])
            .filter_map(|t| match t {
                Term::Var(v) => Some(v),
                Term::Const(_) => None,
            })
            .collect()
    }

    /// True if every variable is assigned and every equation holds.
    pub fn verify(&self, solution: &BTreeMap<char, i64>) -> bool {
        self.equations.iter().all(|e| e.holds(solution) == Some(true))
    }

    fn consistent(&self, solution: &BTreeMap<char, i64>) -> bool {
        self.equations.iter().all(|e| e.holds(solution) != Some(false))
    }

    /// Find an assignment with every variable in `domain`.
    ///
    /// Equations with a single unknown are solved directly first; the
    /// remaining variables are searched in alphabetical order, so the
    /// smallest solution in that order is returned.
    pub fn solve(&self, domain: RangeInclusive<i64>) -> Option<BTreeMap<char, i64>> {
        let mut solution = BTreeMap::new();

        loop {
            let next = self
                .equations
                .iter()
                .filter(|e| e.unknowns(&solution).len() == 1)
                .find_map(|e| e.solve_single(&solution));
            let Some((var, value)) = next else { break };
            let value = value.filter(|v| domain.contains(v))?;
            solution.insert(var, value);
            if !self.consistent(&solution) {
                return None;
            }
        }

        let remaining: Vec<char> = self
            .variables()
            .into_iter()
            .filter(|v| !solution.contains_key(v))
            .collect();

        if self.search(&remaining, &domain, &mut solution) {
            Some(solution)
        } else {
            None
        }
    }

    fn search(
        &self,
        remaining: &[char],
        domain: &RangeInclusive<i64>,
        solution: &mut BTreeMap<char, i64>,
    ) -> bool {
        let Some((&var, rest)) = remaining.split_first() else {
            return self.verify(solution);
        };
        for value in domain.clone() {
            solution.insert(var, value);
            if self.consistent(solution) && self.search(rest, domain, solution) {
                return true;
            }
        }
        solution.remove(&var);
        false
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossMathOutcome {
    pub solution_found: bool,
    /// Variable name to value, present when the solution checks out.
    pub solution: Option<BTreeMap<String, i64>>,
}

pub fn check_crossmath(puzzle: &CrossMath, solution: &BTreeMap<char, i64>) -> CrossMathOutcome {
    let solution_found = puzzle.verify(solution);
    CrossMathOutcome {
        solution_found,
        solution: solution_found
            .then(|| solution.iter().map(|(k, v)| (k.to_string(), *v)).collect()),
    }
}

// ---------------------------------------------------------------------------
// Simulations
// ---------------------------------------------------------------------------

pub const MEMORY_SYMBOLS: [char; 8] = ['★', '●', '▲', '■', '♦', '♠', '♥', '♣'];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryOutcome {
    pub matched_pairs: u32,
    pub total_moves: u32,
    /// Matched pairs per move, as a percentage.
    pub efficiency: f64,
}

/// Play a 16-card memory game with random flips for at most 16 steps.
///
/// A step either flips a card not already face up or, with two cards
/// face up, compares and turns them back down.
pub fn simulate_memory_game<R: Rng + ?Sized>(rng: &mut R) -> MemoryOutcome {
    let mut board: Vec<char> = MEMORY_SYMBOLS.iter().chain(MEMORY_SYMBOLS.iter()).copied().collect();
    board.shuffle(rng);

    let pairs = MEMORY_SYMBOLS.len() as u32;
    let mut flipped: Vec<usize> = Vec::with_capacity(2);
    let mut matched_pairs = 0u32;
    let mut total_moves = 0u32;

    for _ in 0..board.len() {
        if flipped.len() < 2 {
            let card = rng.gen_range(0..board.len());
            if !flipped.contains(&card) {
                flipped.push(card);
                total_moves += 1;
            }
        } else {
            if board[flipped[0]] == board[flipped[1]] {
                matched_pairs += 1;
                if matched_pairs == pairs {
                    break;
                }
            }
            flipped.clear();
        }
    }

    let efficiency = if total_moves > 0 {
        matched_pairs as f64 / total_moves as f64 * 100.0
    } else {
        0.0
    };

    MemoryOutcome {
        matched_pairs,
        total_moves,
        efficiency,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: u32,
    pub total: u32,
}

impl Tally {
    /// Percentage correct; zero when nothing was attempted.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub overall: Tally,
    /// Keyed by operation symbol.
    pub operations: BTreeMap<String, Tally>,
}

/// Answer `rounds` random problems with random guesses in `1..=100`.
pub fn simulate_arithmetic_quiz<R: Rng + ?Sized>(rng: &mut R, rounds: usize) -> QuizOutcome {
    let mut overall = Tally::default();
    let mut operations: BTreeMap<String, Tally> = Operation::ALL
        .iter()
        .map(|op| (op.to_string(), Tally::default()))
        .collect();

    for _ in 0..rounds {
        let problem = generate_problem(rng);
        let guess: i64 = rng.gen_range(1..=100);
        let tally = operations.entry(problem.operation.to_string()).or_default();

        overall.total += 1;
        tally.total += 1;
        if guess == problem.answer {
            overall.correct += 1;
            tally.correct += 1;
        }
    }

    QuizOutcome {
        overall,
        operations,
    }
}

// ---------------------------------------------------------------------------
// Suite
// ---------------------------------------------------------------------------

pub const QUIZ_ROUNDS: usize = 20;

/// Results of one run of every check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSuite {
    pub arithmetic: QuizOutcome,
    pub sudoku: SudokuOutcome,
    pub memory: MemoryOutcome,
    pub crossmath: CrossMathOutcome,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,
}

impl CheckSuite {
    /// The deterministic checks (grid and equations) passed.
    pub fn logic_passed(&self) -> bool {
        self.sudoku.valid && self.crossmath.solution_found
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize check results")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write check results to {}", path.display()))?;
        Ok(())
    }
}

pub fn run_checks<R: Rng + ?Sized>(rng: &mut R) -> CheckSuite {
    let start = Instant::now();

    let arithmetic = simulate_arithmetic_quiz(rng, QUIZ_ROUNDS);
    let sudoku = check_sudoku(&SAMPLE_GRID);
    let memory = simulate_memory_game(rng);
    let crossmath = check_crossmath(&CrossMath::reference(), &CrossMath::reference_solution());

    tracing::info!(
        sudoku = sudoku.valid,
        crossmath = crossmath.solution_found,
        pairs = memory.matched_pairs,
        "game-logic checks complete"
    );

    CheckSuite {
        arithmetic,
        sudoku,
        memory,
        crossmath,
        timestamp: Utc::now(),
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_grid_is_valid() {
        assert!(is_valid_sudoku(&SAMPLE_GRID));
    }

    #[test]
    fn duplicate_in_row_or_column_is_invalid() {
        let mut grid = SAMPLE_GRID;
        grid[0][0] = 2;
        assert!(!is_valid_sudoku(&grid));

        // rows and columns distinct, but the top-left box repeats 1 and 2
        let grid: [[u8; 4]; 4] = [[1, 2, 3, 4], [2, 1, 4, 3], [3, 4, 1, 2], [4, 3, 2, 1]];
        assert!(!is_valid_sudoku(&grid));
    }

    #[test]
    fn non_square_sizes_skip_box_check() {
        let latin: [[u8; 3]; 3] = [[1, 2, 3], [2, 3, 1], [3, 1, 2]];
        assert!(is_valid_sudoku(&latin));
    }

    #[test]
    fn ragged_or_empty_grid_is_invalid() {
        let ragged: Vec<Vec<u8>> = vec![vec![1, 2], vec![2]];
        assert!(!is_valid_sudoku(&ragged));
        let empty: Vec<Vec<u8>> = vec![];
        assert!(!is_valid_sudoku(&empty));
    }

    #[test]
    fn reference_solution_verifies() {
        let puzzle = CrossMath::reference();
        assert!(puzzle.verify(&CrossMath::reference_solution()));
        let outcome = check_crossmath(&puzzle, &CrossMath::reference_solution());
        assert!(outcome.solution_found);
        assert_eq!(outcome.solution.unwrap().get("E"), Some(&20));
    }

    #[test]
    fn wrong_solution_fails_verification() {
        let mut solution = CrossMath::reference_solution();
        solution.insert('D', 1);
        let outcome = check_crossmath(&CrossMath::reference(), &solution);
        assert!(!outcome.solution_found);
        assert!(outcome.solution.is_none());
    }

    #[test]
    fn solver_finds_a_valid_assignment() {
        let puzzle = CrossMath::reference();
        let solution = puzzle.solve(1..=20).unwrap();
        assert!(puzzle.verify(&solution));
        assert_eq!(solution.get(&'E'), Some(&20));
        assert_eq!(solution.get(&'A'), Some(&1));
    }

    #[test]
    fn other_differences_have_no_solution() {
        assert!(CrossMath::with_last_difference(8).solve(0..=30).is_none());
    }

    #[test]
    fn memory_simulation_is_bounded_and_seeded() {
        let a = simulate_memory_game(&mut StdRng::seed_from_u64(3));
        let b = simulate_memory_game(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert!(a.matched_pairs <= 8);
        assert!(a.total_moves <= 16);
        assert!((0.0..=100.0).contains(&a.efficiency));
    }

    #[test]
    fn quiz_tallies_add_up() {
        let outcome = simulate_arithmetic_quiz(&mut StdRng::seed_from_u64(5), 20);
        assert_eq!(outcome.overall.total, 20);
        let per_op: u32 = outcome.operations.values().map(|t| t.total).sum();
        assert_eq!(per_op, 20);
        assert_eq!(outcome.operations.len(), 4);
        assert!(outcome.overall.correct <= outcome.overall.total);
    }

    #[test]
    fn empty_tally_accuracy_is_zero() {
        assert_eq!(Tally::default().accuracy(), 0.0);
        let tally = Tally { correct: 1, total: 4 };
        assert!((tally.accuracy() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn suite_roundtrips_through_json() {
        let suite = run_checks(&mut StdRng::seed_from_u64(1));
        assert!(suite.logic_passed());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("checks.json");
        suite.save_json(&path).unwrap();
        let loaded: CheckSuite =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.sudoku, suite.sudoku);
        assert_eq!(loaded.arithmetic, suite.arithmetic);
    }
}
