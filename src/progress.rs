use crate::game::StarRating;
use crate::model::Level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Clave con la que se guarda el progreso en el almacenamiento de eframe.
pub const PROGRESS_KEY: &str = "emotionGameLevels";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelProgress {
    pub id: u32,
    pub unlocked: bool,
    pub completed: bool,
    pub stars: u8,
}

impl LevelProgress {
    fn locked(id: u32) -> Self {
        Self {
            id,
            unlocked: false,
            completed: false,
            stars: 0,
        }
    }
}

/// Todo lo que sobrevive entre ejecuciones.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Progress {
    pub levels: Vec<LevelProgress>,
    pub visited_museum: bool,
    pub viewed_emotions: BTreeSet<String>,
    pub story_endings: BTreeSet<String>,
}

impl Progress {
    /// Progreso inicial: solo el primer nivel desbloqueado.
    pub fn for_levels(levels: &[Level]) -> Self {
        let mut progress = Self::default();
        progress.sync_levels(levels);
        progress
    }

    /// Ajusta un progreso restaurado al catálogo actual de niveles:
    /// descarta ids desconocidos, añade los nuevos bloqueados y mantiene el primero abierto.
    pub fn sync_levels(&mut self, levels: &[Level]) {
        let mut synced: Vec<LevelProgress> = levels
            .iter()
            .map(|level| {
                self.levels
                    .iter()
                    .find(|p| p.id == level.id)
                    .cloned()
                    .unwrap_or_else(|| LevelProgress::locked(level.id))
            })
            .collect();
        synced.sort_by_key(|p| p.id);
        if let Some(first) = synced.first_mut() {
            first.unlocked = true;
        }
        self.levels = synced;
    }

    pub fn level(&self, id: u32) -> Option<&LevelProgress> {
        self.levels.iter().find(|p| p.id == id)
    }

    pub fn is_unlocked(&self, id: u32) -> bool {
        self.level(id).is_some_and(|p| p.unlocked)
    }

    /// Marca el nivel como completado, conserva la mejor puntuación y abre el siguiente.
    /// Devuelve `true` si el siguiente nivel se ha desbloqueado ahora.
    pub fn complete_level(&mut self, id: u32, stars: StarRating) -> bool {
        let Some(level) = self.levels.iter_mut().find(|p| p.id == id) else {
            log::warn!("Ignoring completion of unknown level {id}");
            return false;
        };
        level.completed = true;
        level.stars = level.stars.max(stars.get());

        match self.levels.iter_mut().find(|p| p.id == id + 1) {
            Some(next) if !next.unlocked => {
                next.unlocked = true;
                log::info!("Level {} unlocked", next.id);
                true
            }
            _ => false,
        }
    }

    pub fn total_stars(&self) -> u32 {
        self.levels.iter().map(|p| u32::from(p.stars)).sum()
    }

    pub fn max_stars(&self) -> u32 {
        self.levels.len() as u32 * u32::from(StarRating::MAX)
    }

    pub fn completed_count(&self) -> usize {
        self.levels.iter().filter(|p| p.completed).count()
    }

    pub fn all_levels_completed(&self) -> bool {
        !self.levels.is_empty() && self.levels.iter().all(|p| p.completed)
    }

    pub fn levels_with_stars(&self, stars: u8) -> usize {
        self.levels.iter().filter(|p| p.stars >= stars).count()
    }

    pub fn record_museum_visit(&mut self) {
        self.visited_museum = true;
    }

    /// Se guarda el nombre: los ids cambian entre el fixture y la colección remota.
    pub fn record_emotion_view(&mut self, emotion_name: &str) {
        self.viewed_emotions.insert(emotion_name.to_string());
    }

    pub fn record_story_ending(&mut self, node_id: &str) {
        self.story_endings.insert(node_id.to_string());
    }
}
