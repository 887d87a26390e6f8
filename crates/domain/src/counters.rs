//! Egg counters — production totals and per-grade counts.

use serde::{Deserialize, Serialize};

use crate::grade::Grade;

/// Running totals reported by the sorter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggCounters {
    /// Eggs sorted since installation.
    pub total: u64,
    /// Eggs sorted today.
    pub daily_total: u64,
    /// Mean egg weight in grams.
    pub average_weight_g: f64,
    /// Eggs rejected by the grader.
    pub rejected: u64,
    pub grades: GradeCounts,
}

/// Number of eggs sorted into each grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GradeCounts {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl GradeCounts {
    #[must_use]
    pub fn get(&self, grade: Grade) -> u64 {
        match grade {
            Grade::A => self.a,
            Grade::B => self.b,
            Grade::C => self.c,
            Grade::D => self.d,
        }
    }

    /// `(grade, count)` pairs in grade order.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, u64)> + '_ {
        Grade::ALL.into_iter().map(|grade| (grade, self.get(grade)))
    }
}
