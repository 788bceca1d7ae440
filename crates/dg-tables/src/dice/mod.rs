//! Dice and randomness sources.
//!
//! Generation never touches a global RNG. Everything that rolls takes a
//! [`RandomSource`], so callers pick between a seeded [`Dice`] for real runs
//! and a [`ScriptedDice`] when the exact rolls matter.

pub mod expr;

pub use expr::DiceExpr;

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A source of uniform die rolls.
///
/// Implementors only provide [`roll_die`](RandomSource::roll_die); the other
/// rolls are derived from it.
pub trait RandomSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    ///
    /// A zero-sided die always rolls 0.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll a typed die.
    fn roll(&mut self, die: Die) -> u32 {
        self.roll_die(die.sides())
    }

    /// Roll a d20.
    fn roll_d20(&mut self) -> u32 {
        self.roll(Die::D20)
    }

    /// Roll percentile dice.
    fn roll_d100(&mut self) -> u32 {
        self.roll(Die::D100)
    }

    /// Sum of `count` rolls of a `sides`-faced die, plus `modifier`.
    ///
    /// Returns `modifier` unchanged when `count` or `sides` is not positive.
    fn roll_dice_sum(&mut self, count: i32, sides: i32, modifier: i32) -> i32 {
        if count <= 0 || sides <= 0 {
            return modifier;
        }
        let total: i64 = (0..count)
            .map(|_| i64::from(self.roll_die(sides as u32)))
            .sum();
        (total + i64::from(modifier)).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

/// Seeded dice backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
    seed: u64,
}

impl Dice {
    /// Dice that replay the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Dice with a random seed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// The seed these dice were created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for Dice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rng.random_range(1..=sides)
    }
}

/// Dice that return a fixed script of values, cycling when exhausted.
///
/// Each scripted value is clamped into the range of the die being rolled.
/// An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    script: Vec<u32>,
    pending: VecDeque<u32>,
    rolls: usize,
}

impl ScriptedDice {
    /// Dice that return `script` in order.
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        let script = script.into();
        Self {
            pending: script.iter().copied().collect(),
            script,
            rolls: 0,
        }
    }

    /// Number of dice rolled so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }
}

impl RandomSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rolls += 1;
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(1).clamp(1, sides)
    }
}
