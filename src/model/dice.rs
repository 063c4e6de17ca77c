//! Dice models.
//!
//! All attested rule sets roll a handful of binary dice (tetrahedra with two
//! marked corners) and count the marked results, giving a binomial
//! distribution over `0..=N`. Some rule sets remap a throw of zero to the
//! highest value instead, so that every throw moves a piece.
//!
//! Dice are plain data: a die count and the zero-remap flag. Randomness is
//! injected through [`GameRng`], keeping rolls reproducible.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::rng::GameRng;

/// A single throw of the dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll(u8);

impl Roll {
    /// Create a roll with the given value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The number of places the throw allows a piece to move.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parameterized dice model: `die_count` binary dice, summed.
///
/// With `zero_as_max` set, a throw summing to zero is remapped to
/// `die_count + 1`, the highest possible value. The probability mass of zero
/// moves with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    die_count: u8,
    zero_as_max: bool,
}

impl Dice {
    /// Create a dice model.
    ///
    /// With `zero_as_max`, the maximum roll is `die_count + 1`, so the die
    /// count must leave that value representable. Once construction
    /// succeeds, no throw can fail.
    pub fn new(die_count: u8, zero_as_max: bool) -> Result<Self, RulesError> {
        if die_count == 0 {
            return Err(RulesError::NoDice);
        }
        if zero_as_max && die_count == u8::MAX {
            return Err(RulesError::TooManyDice { count: die_count });
        }
        Ok(Self {
            die_count,
            zero_as_max,
        })
    }

    /// The standard four binary dice of the Royal Game of Ur.
    #[must_use]
    pub const fn four_binary() -> Self {
        Self {
            die_count: 4,
            zero_as_max: false,
        }
    }

    /// Three binary dice where a throw of zero counts as four.
    #[must_use]
    pub const fn three_binary_zero_as_max() -> Self {
        Self {
            die_count: 3,
            zero_as_max: true,
        }
    }

    /// The number of binary dice thrown.
    #[must_use]
    pub const fn die_count(self) -> u8 {
        self.die_count
    }

    /// Whether a throw of zero is remapped to the maximum value.
    #[must_use]
    pub const fn zero_as_max(self) -> bool {
        self.zero_as_max
    }

    /// The maximum value these dice can roll.
    #[must_use]
    pub const fn max_value(self) -> u8 {
        if self.zero_as_max {
            self.die_count + 1
        } else {
            self.die_count
        }
    }

    /// Whether these dice can ever produce the given value.
    #[must_use]
    pub const fn is_valid_roll(self, value: u8) -> bool {
        if self.zero_as_max && value == 0 {
            return false;
        }
        value <= self.max_value()
    }

    /// Throw the dice, drawing from the given randomness source.
    pub fn roll(self, rng: &mut GameRng) -> Roll {
        let mut value = 0;
        for _ in 0..self.die_count {
            if rng.flip() {
                value += 1;
            }
        }
        if self.zero_as_max && value == 0 {
            value = self.max_value();
        }
        Roll::new(value)
    }

    /// The exact probability of rolling the given value.
    ///
    /// Values these dice cannot produce have probability zero; in
    /// particular, `probability(0)` is zero once the zero-remap has folded
    /// its mass into the maximum value.
    #[must_use]
    pub fn probability(self, value: u8) -> f64 {
        self.probabilities()
            .get(value as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// The probability of each roll value, indexed by value.
    ///
    /// The returned distribution always sums to 1.
    #[must_use]
    pub fn probabilities(self) -> Vec<f64> {
        let n = self.die_count as usize;

        // Binomial distribution over 0..=N.
        let base = 0.5_f64.powi(n as i32);
        let mut n_choose_k = 1.0;
        let mut pmf = Vec::with_capacity(n + 2);
        for k in 0..=n {
            pmf.push(base * n_choose_k);
            n_choose_k = n_choose_k * (n - k) as f64 / (k + 1) as f64;
        }

        if self.zero_as_max {
            let zero_mass = pmf[0];
            pmf[0] = 0.0;
            pmf.push(zero_mass);
        }
        pmf
    }
}

/// The named dice models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceType {
    /// Four binary dice, values 0 to 4.
    FourBinary,
    /// Three binary dice where zero counts as four.
    ThreeBinaryZeroAsMax,
}

impl DiceType {
    /// The name of this dice model.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DiceType::FourBinary => "FourBinary",
            DiceType::ThreeBinaryZeroAsMax => "ThreeBinaryZeroAsMax",
        }
    }

    /// Create a set of these dice.
    #[must_use]
    pub const fn create_dice(self) -> Dice {
        match self {
            DiceType::FourBinary => Dice::four_binary(),
            DiceType::ThreeBinaryZeroAsMax => Dice::three_binary_zero_as_max(),
        }
    }
}
