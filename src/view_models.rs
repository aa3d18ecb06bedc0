// src/view_models.rs

use crate::game::StarRating;

#[derive(Clone, Debug)]
pub struct LevelInfo {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    pub completed: bool,
    pub stars: u8,
}

#[derive(Clone, Debug)]
pub struct BadgeInfo {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
}

impl LevelInfo {
    pub fn label(&self) -> String {
        if !self.unlocked {
            format!("Level {}: {} 🔒", self.id, self.name)
        } else if self.completed {
            format!("Level {}: {} {}", self.id, self.name, star_row(self.stars))
        } else {
            format!("Level {}: {} 🔓", self.id, self.name)
        }
    }
}

impl BadgeInfo {
    pub fn label(&self) -> String {
        if self.unlocked {
            format!("{} {}", self.icon, self.name)
        } else {
            format!("🔒 {}", self.name)
        }
    }
}

/// Estrellas llenas y vacías hasta el máximo.
pub fn star_row(stars: u8) -> String {
    let filled = stars.min(StarRating::MAX) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(StarRating::MAX as usize - filled)
    )
}
