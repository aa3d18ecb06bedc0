use super::*;
use crate::badges;
use crate::game::StarRating;

impl EmotionApp {
    pub fn finish_level(&mut self, level_id: u32, stars: StarRating) {
        log::info!("Level {level_id} finished with {} star(s)", stars.get());
        self.with_badge_check(|progress| {
            progress.complete_level(level_id, stars);
        });
    }

    /// Aplica un cambio al progreso y anuncia las insignias que desbloquea.
    pub(crate) fn with_badge_check(&mut self, change: impl FnOnce(&mut Progress)) {
        let before = self.unlocked_badge_ids();
        change(&mut self.progress);
        let after = self.unlocked_badge_ids();

        let fresh = badges::newly_unlocked(&self.data.badges, &before, &after);
        for badge in &fresh {
            log::info!("Badge unlocked: {}", badge.name);
        }
        self.new_badges.extend(fresh.iter().map(|b| b.id));
    }

    pub fn dismiss_badge_notice(&mut self) {
        self.new_badges.clear();
    }
}
