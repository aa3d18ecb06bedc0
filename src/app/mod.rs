use crate::config::{ContentConfig, GameConfig};
use crate::data::{GameData, QuestionBank, read_game_data_embedded};
use crate::game::{EmotionGame, SimulatedPlayer};
use crate::model::{AppState, Emotion};
use crate::museum::Gallery;
use crate::progress::Progress;
use crate::story::StoryWalk;

// Submódulos
pub mod game_loop;
pub mod loading;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;

// Re-export de view models
pub use crate::view_models::{BadgeInfo, LevelInfo};

/// Sesión del minijuego en curso junto con su vídeo.
pub struct ActiveGame {
    pub session: EmotionGame,
    pub player: SimulatedPlayer,
}

pub struct EmotionApp {
    pub progress: Progress,
    pub data: GameData,
    /// Emociones en uso: las del fixture hasta que llega la colección remota.
    pub emotions: Vec<Emotion>,
    pub bank: QuestionBank,
    pub config: GameConfig,
    pub content: ContentConfig,
    pub state: AppState,
    pub game: Option<ActiveGame>,
    pub gallery: Gallery,
    pub story_walk: StoryWalk,
    pub message: String,
    /// Insignias recién conseguidas, pendientes de anunciar.
    pub new_badges: Vec<u32>,
    pub confirm_reset: bool,
    #[cfg(not(target_arch = "wasm32"))]
    pending_emotions: Option<std::sync::mpsc::Receiver<Vec<Emotion>>>,
}

impl EmotionApp {
    /// Arranque normal: fixture embebido, configuración del entorno y progreso restaurado.
    pub fn new(saved: Option<Progress>) -> Self {
        let data = match read_game_data_embedded() {
            Ok(data) => data,
            Err(err) => {
                log::error!("Error loading game data: {err}");
                GameData::default()
            }
        };
        let mut app = Self::with_data(
            data,
            saved.unwrap_or_default(),
            GameConfig::load(),
            ContentConfig::from_env(),
        );
        app.start_content_fetch();
        app
    }

    pub fn with_data(
        data: GameData,
        mut progress: Progress,
        config: GameConfig,
        content: ContentConfig,
    ) -> Self {
        progress.sync_levels(&data.levels);
        let bank = data.question_bank();
        let emotions = data.emotions.clone();
        let story_walk = StoryWalk::new(&data.story);
        log::info!(
            "Loaded {} emotion(s), {} question(s), {} level(s)",
            emotions.len(),
            bank.len(),
            data.levels.len()
        );

        Self {
            progress,
            data,
            emotions,
            bank,
            config,
            content,
            state: AppState::Home,
            game: None,
            gallery: Gallery::default(),
            story_walk,
            message: String::new(),
            new_badges: Vec::new(),
            confirm_reset: false,
            #[cfg(not(target_arch = "wasm32"))]
            pending_emotions: None,
        }
    }

    fn new_session(&self, level_id: u32) -> ActiveGame {
        let session = EmotionGame::new(level_id, &self.emotions, &self.bank, self.config.clone());
        let duration = session
            .emotion()
            .map(Emotion::video_seconds)
            .unwrap_or_default();
        ActiveGame {
            session,
            player: SimulatedPlayer::new(duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::StageKind;

    fn app() -> EmotionApp {
        let data = read_game_data_embedded().expect("fixture should parse");
        let content = ContentConfig {
            offline: true,
            ..ContentConfig::default()
        };
        EmotionApp::with_data(data, Progress::default(), GameConfig::default(), content)
    }

    /// Juega la sesión activa respondiendo bien a todo.
    fn play_through(app: &mut EmotionApp) {
        for _ in 0..1000 {
            if app.state != AppState::Game {
                return;
            }
            app.drive_game(0.1);
            let pending = app
                .game
                .as_ref()
                .filter(|g| g.session.selected_answer().is_none())
                .and_then(|g| g.session.current_question())
                .map(|q| q.correct_answer.clone());
            if let Some(answer) = pending {
                app.answer(&answer);
            }
        }
        panic!("session never finished");
    }

    #[test]
    fn starts_at_home_with_first_level_open() {
        let app = app();
        assert_eq!(app.state, AppState::Home);
        assert!(app.progress.is_unlocked(1));
        assert!(!app.progress.is_unlocked(2));
        assert_eq!(app.level_infos().len(), 6);
    }

    #[test]
    fn locked_level_cannot_start() {
        let mut app = app();
        assert!(!app.start_level(2));
        assert!(app.game.is_none());
        assert!(app.start_level(1));
        assert_eq!(app.state, AppState::Game);
        assert_eq!(
            app.game.as_ref().and_then(|g| g.session.emotion()).map(|e| e.name.as_str()),
            Some("Joy")
        );
    }

    #[test]
    fn perfect_run_records_stars_unlocks_and_badge() {
        let mut app = app();
        app.start_level(1);
        play_through(&mut app);

        assert_eq!(app.state, AppState::LevelMap);
        assert!(app.game.is_none());
        assert_eq!(app.progress.level(1).map(|l| l.stars), Some(3));
        assert!(app.progress.is_unlocked(2));
        // "Level Master": nivel 1 con tres estrellas.
        assert!(app.new_badges.contains(&3));
    }

    #[test]
    fn exiting_mid_game_records_nothing() {
        let mut app = app();
        app.start_level(1);
        app.drive_game(1.0);
        app.exit_game();
        for _ in 0..50 {
            app.drive_game(1.0);
        }
        assert_eq!(app.state, AppState::LevelMap);
        assert!(app.game.is_none());
        assert!(!app.progress.level(1).is_some_and(|l| l.completed));
    }

    #[test]
    fn complete_stage_waits_for_celebration() {
        let mut app = app();
        app.start_level(1);
        for _ in 0..400 {
            app.drive_game(0.1);
            let Some(active) = app.game.as_ref() else {
                break;
            };
            if active.session.stage().kind() == StageKind::Complete {
                break;
            }
            let answer = active
                .session
                .current_question()
                .filter(|_| active.session.selected_answer().is_none())
                .map(|q| q.correct_answer.clone());
            if let Some(answer) = answer {
                app.answer(&answer);
            }
        }
        assert_eq!(app.state, AppState::Game);
        assert!(!app.progress.level(1).is_some_and(|l| l.completed));

        app.drive_game(3.0);
        assert_eq!(app.state, AppState::LevelMap);
        assert!(app.progress.level(1).is_some_and(|l| l.completed));
    }

    #[test]
    fn level_without_video_completes_after_countdown() {
        let mut app = app();
        for emotion in &mut app.emotions {
            emotion.video = None;
        }
        app.start_level(1);
        for _ in 0..60 {
            app.drive_game(0.1);
        }
        assert_eq!(
            app.game.as_ref().map(|g| g.session.stage().kind()),
            Some(StageKind::Complete)
        );

        app.drive_game(3.0);
        assert_eq!(app.state, AppState::LevelMap);
        assert_eq!(app.progress.level(1).map(|l| l.stars), Some(1));
    }

    #[test]
    fn museum_and_story_feed_badges() {
        let mut app = app();
        app.open_museum();
        assert!(app.new_badges.contains(&1));

        app.open_storyboard();
        app.choose_story_option("excited");
        app.choose_story_option("join");
        assert!(app.progress.story_endings.contains("join"));
        assert!(app.new_badges.contains(&2));
        assert!(app.new_badges.contains(&5));
        assert_eq!(app.badge_percentage(), 33);

        app.dismiss_badge_notice();
        assert!(app.new_badges.is_empty());
    }

    #[test]
    fn reset_clears_progress() {
        let mut app = app();
        app.open_museum();
        app.start_level(1);
        play_through(&mut app);
        app.confirm_reset = true;

        app.reset_progress();
        assert!(!app.confirm_reset);
        assert!(!app.progress.visited_museum);
        assert!(!app.progress.is_unlocked(2));
        assert_eq!(app.state, AppState::Home);
    }
}
