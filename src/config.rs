use serde::{Deserialize, Serialize};

const DEFAULT_CONTENT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
const DEFAULT_PROJECT: &str = "67c98b5e0035bedcf913";
const DEFAULT_DATABASE: &str = "67c98cc3002b3e3dc1a5";
const DEFAULT_COLLECTION: &str = "67c98ce00023c7585f67";

/// Cómo se emparejan los avances del vídeo con la pregunta actual.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Solo dentro de la ventana de tolerancia; si un salto la esquiva, la pregunta se pierde.
    #[default]
    Sequential,
    /// También dispara si la marca de tiempo ya quedó atrás (robusto ante saltos).
    CatchUp,
}

/// Constantes de ritmo del minijuego, en segundos salvo la cuenta atrás.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Unidades enteras de la cuenta atrás de preparación.
    pub countdown: u32,
    pub match_tolerance: f64,
    /// Pausa entre detener el vídeo y mostrar la pregunta.
    pub reveal_delay: f64,
    pub feedback_delay: f64,
    pub celebration_delay: f64,
    pub match_policy: MatchPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown: 5,
            match_tolerance: 0.5,
            reveal_delay: 0.0,
            feedback_delay: 1.5,
            celebration_delay: 3.0,
            match_policy: MatchPolicy::Sequential,
        }
    }
}

impl GameConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Rechaza valores con los que el minijuego no puede funcionar.
    pub fn validate(&self) -> Result<(), String> {
        if !self.match_tolerance.is_finite() || self.match_tolerance <= 0.0 {
            return Err(format!(
                "match_tolerance must be a positive number, got {}",
                self.match_tolerance
            ));
        }
        let delays = [
            ("reveal_delay", self.reveal_delay),
            ("feedback_delay", self.feedback_delay),
            ("celebration_delay", self.celebration_delay),
        ];
        for (name, value) in delays {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be zero or more seconds, got {value}"));
            }
        }
        Ok(())
    }

    /// Parsea y valida; el texto se descarta entero si algo no cuadra.
    pub fn parse(text: &str) -> Result<Self, String> {
        let config = Self::from_yaml(text).map_err(|err| err.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Lee `EMOTION_QUEST_GAME_CONFIG` si existe; cualquier fallo deja los valores por defecto.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = env_value("EMOTION_QUEST_GAME_CONFIG") else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => match Self::parse(&text) {
                Ok(config) => {
                    log::info!("Game config loaded from {path}");
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring invalid game config {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read game config {path}: {err}");
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Coordenadas de la colección de emociones en la base de datos alojada.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    pub endpoint: String,
    pub project: String,
    pub database: String,
    pub collection: String,
    pub offline: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTENT_ENDPOINT.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            offline: false,
        }
    }
}

impl ContentConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env_value("EMOTION_QUEST_CONTENT_ENDPOINT").unwrap_or(defaults.endpoint),
            project: env_value("EMOTION_QUEST_CONTENT_PROJECT").unwrap_or(defaults.project),
            database: env_value("EMOTION_QUEST_CONTENT_DATABASE").unwrap_or(defaults.database),
            collection: env_value("EMOTION_QUEST_CONTENT_COLLECTION")
                .unwrap_or(defaults.collection),
            offline: env_value("EMOTION_QUEST_OFFLINE")
                .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
                .unwrap_or(false),
        }
    }

    // En la web solo se usan los fixtures embebidos.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint.trim_end_matches('/'),
            self.database,
            self.collection
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
