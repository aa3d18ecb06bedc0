use super::*;
use crate::story::StoryStep;

impl EmotionApp {
    pub fn go_home(&mut self) {
        self.state = AppState::Home;
        self.message.clear();
    }

    pub fn open_level_map(&mut self) {
        self.state = AppState::LevelMap;
    }

    pub fn open_badges(&mut self) {
        self.state = AppState::Badges;
        self.message.clear();
    }

    pub fn open_museum(&mut self) {
        self.gallery.close();
        self.state = AppState::FaceMuseum;
        self.message.clear();
        self.with_badge_check(Progress::record_museum_visit);
    }

    pub fn open_storyboard(&mut self) {
        self.story_walk = StoryWalk::new(&self.data.story);
        self.state = AppState::Storyboard;
        self.message.clear();
    }

    /// Arranca el minijuego de un nivel. Los niveles bloqueados no se abren.
    pub fn start_level(&mut self, level_id: u32) -> bool {
        if !self.progress.is_unlocked(level_id) {
            log::warn!("Level {level_id} is locked");
            return false;
        }
        self.game = Some(self.new_session(level_id));
        self.state = AppState::Game;
        self.message.clear();
        true
    }

    /// Salida a petición del usuario: la sesión no llega a informar de nada.
    pub fn exit_game(&mut self) {
        if let Some(mut active) = self.game.take() {
            active.session.exit();
        }
        self.state = AppState::LevelMap;
    }

    pub fn view_emotion(&mut self, index: usize) {
        let Some(name) = self.gallery.open(index, &self.emotions).map(|e| e.name.clone()) else {
            return;
        };
        self.with_badge_check(|progress| progress.record_emotion_view(&name));
    }

    pub fn choose_story_option(&mut self, option_id: &str) {
        match self.story_walk.choose(&self.data.story, option_id) {
            Some(StoryStep::ReachedEnding { node }) => {
                log::info!("Story ending reached: {node}");
                self.with_badge_check(|progress| progress.record_story_ending(&node));
            }
            Some(StoryStep::Moved) | Some(StoryStep::Restarted) => {}
            None => log::debug!("Unknown story option {option_id:?}"),
        }
    }

    pub fn story_back(&mut self) {
        self.story_walk.back();
    }
}
