use super::*;
use crate::game::{GameEvent, StarRating};

impl EmotionApp {
    /// Un fotograma del minijuego: reloj de la sesión, vídeo, comprobación de
    /// preguntas, fin natural y reparto de eventos.
    pub fn drive_game(&mut self, dt: f64) {
        let Some(active) = self.game.as_mut() else {
            return;
        };
        active.session.tick(dt, &mut active.player);
        active.player.advance(dt);
        active.session.on_progress(&mut active.player);
        if active.player.take_ended() {
            active.session.on_video_ended();
        }
        let level_id = active.session.level_id();
        let events = active.session.take_events();

        for event in events {
            self.handle_game_event(level_id, event);
        }
    }

    pub fn answer(&mut self, option: &str) {
        if let Some(active) = self.game.as_mut() {
            if active.session.submit_answer(option).is_none() {
                log::debug!("Answer {option:?} ignored: no question is waiting");
            }
        }
    }

    fn handle_game_event(&mut self, level_id: u32, event: GameEvent) {
        match event {
            GameEvent::QuestionShown { index } => {
                log::debug!("Level {level_id}: question {} shown", index + 1);
            }
            GameEvent::Answered { index, correct } => {
                log::debug!("Level {level_id}: question {} answered, correct={correct}", index + 1);
            }
            GameEvent::Celebrate => {
                self.message = "🎉 Great job!".to_string();
            }
            GameEvent::Completed(stars) => self.on_level_completed(level_id, stars),
            GameEvent::Exited => {
                self.game = None;
                self.state = AppState::LevelMap;
            }
        }
    }

    fn on_level_completed(&mut self, level_id: u32, stars: StarRating) {
        self.finish_level(level_id, stars);
        self.game = None;
        self.state = AppState::LevelMap;
        self.message = format!("Level {level_id} complete! {stars}");
    }
}
