use super::*;
use crate::badges::{self, BadgeContext};
use std::collections::BTreeSet;

impl EmotionApp {
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        self.data
            .levels
            .iter()
            .map(|level| {
                let saved = self.progress.level(level.id);
                LevelInfo {
                    id: level.id,
                    name: level.name.clone(),
                    description: level.description.clone(),
                    unlocked: saved.is_some_and(|p| p.unlocked),
                    completed: saved.is_some_and(|p| p.completed),
                    stars: saved.map_or(0, |p| p.stars),
                }
            })
            .collect()
    }

    fn badge_context(&self) -> BadgeContext<'_> {
        BadgeContext {
            progress: &self.progress,
            emotions: &self.emotions,
            story: &self.data.story,
        }
    }

    pub fn unlocked_badge_ids(&self) -> BTreeSet<u32> {
        badges::unlocked_ids(&self.data.badges, &self.badge_context())
    }

    pub fn badge_infos(&self) -> Vec<BadgeInfo> {
        let unlocked = self.unlocked_badge_ids();
        self.data
            .badges
            .iter()
            .map(|badge| BadgeInfo {
                id: badge.id,
                name: badge.name.clone(),
                description: badge.description.clone(),
                icon: badge.icon.clone(),
                unlocked: unlocked.contains(&badge.id),
            })
            .collect()
    }

    pub fn badge_percentage(&self) -> u32 {
        badges::completion_percentage(&self.data.badges, &self.badge_context())
    }

    /// Insignias recién conseguidas, con sus datos, para el aviso.
    pub fn new_badge_infos(&self) -> Vec<BadgeInfo> {
        self.badge_infos()
            .into_iter()
            .filter(|info| self.new_badges.contains(&info.id))
            .collect()
    }
}
