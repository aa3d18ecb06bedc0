//! Origen de las emociones: el fixture embebido o la colección remota.

use crate::error::{ContentError, Result};
use crate::model::Emotion;
use serde::Deserialize;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub trait EmotionSource {
    fn name(&self) -> &str;
    fn list_emotions(&self) -> Result<Vec<Emotion>>;
}

/// Emociones ya cargadas en memoria (normalmente las del YAML embebido).
#[derive(Debug, Clone)]
pub struct FixtureSource {
    emotions: Vec<Emotion>,
}

impl FixtureSource {
    pub fn new(emotions: Vec<Emotion>) -> Self {
        Self { emotions }
    }
}

impl EmotionSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn list_emotions(&self) -> Result<Vec<Emotion>> {
        Ok(self.emotions.clone())
    }
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<EmotionDocument>,
}

#[derive(Debug, Deserialize)]
struct EmotionDocument {
    #[serde(rename = "$id")]
    id: String,
    name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    video: Option<String>,
    #[serde(default, rename = "videoDuration")]
    video_duration: Option<f64>,
}

impl From<EmotionDocument> for Emotion {
    fn from(doc: EmotionDocument) -> Self {
        let mut images = doc.images;
        match doc.image.filter(|s| !s.trim().is_empty()) {
            Some(cover) => images.insert(0, cover),
            None if images.is_empty() => images.push(PLACEHOLDER_IMAGE.to_string()),
            None => {}
        }
        Emotion {
            id: doc.id,
            name: doc.name,
            images,
            video: doc.video.filter(|s| !s.trim().is_empty()),
            video_duration: doc.video_duration,
            description: doc.description,
        }
    }
}

/// Traduce la respuesta de la API de documentos a emociones.
pub fn parse_document_list(text: &str) -> Result<Vec<Emotion>> {
    let list: DocumentList = serde_json::from_str(text)?;
    Ok(list.documents.into_iter().map(Emotion::from).collect())
}

/// Intenta la fuente principal y, si falla o no trae nada, usa la de respaldo.
pub fn load_emotions(primary: &dyn EmotionSource, fallback: &dyn EmotionSource) -> Vec<Emotion> {
    match primary.list_emotions() {
        Ok(emotions) if !emotions.is_empty() => {
            log::info!("Loaded {} emotion(s) from {}", emotions.len(), primary.name());
            return emotions;
        }
        Ok(_) => log::warn!("{} returned no emotions", primary.name()),
        Err(err) => log::error!("Error fetching emotions from {}: {err}", primary.name()),
    }
    fallback.list_emotions().unwrap_or_else(|err| {
        log::error!("Error fetching emotions from {}: {err}", fallback.name());
        Vec::new()
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub use remote::{RemoteSource, spawn_fetch};

#[cfg(not(target_arch = "wasm32"))]
mod remote {
    use super::*;
    use crate::config::ContentConfig;
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    /// Colección de documentos de la base de datos alojada.
    pub struct RemoteSource {
        config: ContentConfig,
        client: reqwest::blocking::Client,
    }

    impl RemoteSource {
        pub fn new(config: ContentConfig) -> Result<Self> {
            if config.offline {
                return Err(ContentError::Unavailable);
            }
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()?;
            Ok(Self { config, client })
        }
    }

    impl EmotionSource for RemoteSource {
        fn name(&self) -> &str {
            "remote"
        }

        fn list_emotions(&self) -> Result<Vec<Emotion>> {
            let url = self.config.documents_url();
            log::debug!("GET {url}");
            let response = self
                .client
                .get(&url)
                .header("X-Appwrite-Project", &self.config.project)
                .header("Content-Type", "application/json")
                .send()?;

            let status = response.status();
            if !status.is_success() {
                return Err(ContentError::Status(status.as_u16()));
            }
            let body = response.text()?;
            parse_document_list(&body)
        }
    }

    /// Lanza la carga en un hilo aparte; el resultado, ya con el respaldo aplicado,
    /// llega por el canal.
    pub fn spawn_fetch<P, F>(primary: P, fallback: F) -> Receiver<Vec<Emotion>>
    where
        P: EmotionSource + Send + 'static,
        F: EmotionSource + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let emotions = load_emotions(&primary, &fallback);
            if tx.send(emotions).is_err() {
                log::debug!("Emotion fetch finished after the receiver was dropped");
            }
        });
        rx
    }
}
