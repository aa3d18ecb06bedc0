use serde::{Deserialize, Serialize};

/// Duración por defecto de un vídeo cuando la fuente no la indica (segundos).
pub const DEFAULT_VIDEO_SECONDS: f64 = 30.0;

/// Emoción que protagoniza una sesión de aprendizaje.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Emotion {
    pub id: String,
    pub name: String,
    /// Al menos una imagen; la primera es la portada.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default, rename = "videoDuration", alias = "video_duration")]
    pub video_duration: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl Emotion {
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or("/placeholder.svg")
    }

    pub fn video_seconds(&self) -> f64 {
        self.video_duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(DEFAULT_VIDEO_SECONDS)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    /// Nombre de la emoción a la que pertenece
    pub emotion: String,
    /// Segundo del vídeo en el que se interrumpe la reproducción
    #[serde(alias = "time")]
    pub timestamp: f64,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", alias = "correctOption", alias = "correct_answer")]
    pub correct_answer: String,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    pub fn is_well_formed(&self) -> bool {
        self.options.iter().any(|o| *o == self.correct_answer)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Level {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    LevelMap,
    Game,
    FaceMuseum,
    Badges,
    Storyboard,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
