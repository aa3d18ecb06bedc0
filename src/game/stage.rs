use super::scoring::StarRating;

/// Estado completo de la sesión como unión etiquetada: las combinaciones
/// imposibles (pregunta visible con la sesión terminada, etc.) no se pueden construir.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Preparation {
        remaining: u32,
    },
    Playing,
    /// Vídeo en pausa, esperando el retardo de ritmo antes de mostrar la pregunta.
    Revealing {
        question: usize,
    },
    AwaitingAnswer {
        question: usize,
        attempt: u32,
    },
    /// Respuesta juzgada; se muestra el resultado hasta que vence el retardo de feedback.
    Resolved {
        question: usize,
        answer: String,
        correct: bool,
        attempt: u32,
    },
    Complete {
        stars: StarRating,
    },
    Exited,
}

/// Fase de primer nivel, la que decide qué pantalla se pinta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Preparation,
    Playback,
    Complete,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizResult {
    Correct,
    Incorrect,
}

/// Lo que la sesión comunica hacia fuera; el anfitrión lo recoge con `take_events`.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    QuestionShown { index: usize },
    Answered { index: usize, correct: bool },
    /// Señal cosmética para lanzar el confeti.
    Celebrate,
    Completed(StarRating),
    Exited,
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Preparation { .. } => StageKind::Preparation,
            Stage::Playing
            | Stage::Revealing { .. }
            | Stage::AwaitingAnswer { .. }
            | Stage::Resolved { .. } => StageKind::Playback,
            Stage::Complete { .. } => StageKind::Complete,
            Stage::Exited => StageKind::Exited,
        }
    }

    /// Índice de la pregunta superpuesta al vídeo, si la hay.
    pub fn overlay_question(&self) -> Option<usize> {
        match *self {
            Stage::AwaitingAnswer { question, .. } | Stage::Resolved { question, .. } => {
                Some(question)
            }
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Complete { .. } | Stage::Exited)
    }
}
