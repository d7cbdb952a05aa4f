//! Arithmetic bot deterrent: "What is a + b?".
//!
//! This is a speed bump for naive form spammers, not a security control.

use rand::Rng;

/// Smallest operand a challenge can draw.
pub const MIN_OPERAND: i32 = 1;
/// Largest operand a challenge can draw.
pub const MAX_OPERAND: i32 = 10;

/// One addition question and its answer.
///
/// Only [`Challenge::new`] and [`Challenge::generate`] build one, so both
/// operands always sit in `MIN_OPERAND..=MAX_OPERAND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    operand_a: i32,
    operand_b: i32,
}

impl Challenge {
    /// Build a challenge from explicit operands.
    ///
    /// Operands outside `MIN_OPERAND..=MAX_OPERAND` are clamped into range so a
    /// challenge never asks something the generator could not have drawn.
    pub fn new(operand_a: i32, operand_b: i32) -> Self {
        Self {
            operand_a: operand_a.clamp(MIN_OPERAND, MAX_OPERAND),
            operand_b: operand_b.clamp(MIN_OPERAND, MAX_OPERAND),
        }
    }

    /// Draw both operands independently and uniformly from `[1, 10]`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            operand_a: rng.gen_range(MIN_OPERAND..=MAX_OPERAND),
            operand_b: rng.gen_range(MIN_OPERAND..=MAX_OPERAND),
        }
    }

    /// Left-hand operand.
    pub fn operand_a(&self) -> i32 {
        self.operand_a
    }

    /// Right-hand operand.
    pub fn operand_b(&self) -> i32 {
        self.operand_b
    }

    /// The only answer that passes.
    pub fn expected_sum(&self) -> i32 {
        self.operand_a + self.operand_b
    }

    /// Question text shown next to the answer input.
    pub fn question(&self) -> String {
        format!("What is {} + {}?", self.operand_a, self.operand_b)
    }

    /// Whether `answer` solves this challenge.
    pub fn accepts(&self, answer: i32) -> bool {
        answer == self.expected_sum()
    }
}
