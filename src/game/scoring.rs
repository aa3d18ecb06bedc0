use serde::{Deserialize, Serialize};
use std::fmt;

const TWO_STARS_PERCENT: f64 = 50.0;
const THREE_STARS_PERCENT: f64 = 75.0;

/// Valoración final de una sesión: siempre entre 1 y 3 estrellas.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarRating(u8);

impl StarRating {
    pub const MAX: u8 = 3;

    /// Cuenta aciertos eventuales (no al primer intento). Sin preguntas el porcentaje es 0.
    pub fn from_score(correct: usize, total: usize) -> Self {
        let percent = percent_correct(correct, total);
        let stars = if percent >= THREE_STARS_PERCENT {
            3
        } else if percent >= TWO_STARS_PERCENT {
            2
        } else {
            1
        };
        Self(stars)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..Self::MAX {
            f.write_str(if i < self.0 { "★" } else { "☆" })?;
        }
        Ok(())
    }
}

pub fn percent_correct(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    }
}
