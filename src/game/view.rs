use super::scoring::StarRating;
use super::stage::{QuizResult, StageKind};
use crate::model::{Emotion, Question};

/// Modelo de lectura para la capa de presentación. No se serializa.
#[derive(Debug, Clone)]
pub struct GameView<'a> {
    pub level_id: u32,
    pub stage: StageKind,
    pub countdown: Option<u32>,
    pub countdown_total: u32,
    pub emotion: Option<&'a Emotion>,
    pub question: Option<&'a Question>,
    /// Número (desde 1) de la pregunta superpuesta.
    pub question_number: usize,
    pub total_questions: usize,
    pub selected_answer: Option<&'a str>,
    pub result: Option<QuizResult>,
    pub feedback: Option<&'a str>,
    pub correct_answers: usize,
    pub stars: Option<StarRating>,
}

/// Cómo debe pintarse cada botón de respuesta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Correct,
    Wrong,
}

impl GameView<'_> {
    /// Fracción del círculo de la cuenta atrás ya consumida (0..=1).
    pub fn countdown_fraction(&self) -> f32 {
        match self.countdown {
            Some(remaining) if self.countdown_total > 0 => {
                1.0 - remaining as f32 / self.countdown_total as f32
            }
            _ => 1.0,
        }
    }

    /// Los botones quedan bloqueados mientras se muestra el resultado.
    pub fn answers_enabled(&self) -> bool {
        self.question.is_some() && self.selected_answer.is_none()
    }

    pub fn option_state(&self, option: &str) -> OptionState {
        match (self.result, self.question) {
            (Some(QuizResult::Correct), Some(q)) if q.correct_answer == option => {
                OptionState::Correct
            }
            (Some(QuizResult::Incorrect), _) if self.selected_answer == Some(option) => {
                OptionState::Wrong
            }
            _ => OptionState::Idle,
        }
    }
}
