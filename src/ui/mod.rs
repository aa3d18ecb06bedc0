mod helpers;
pub mod layout;
pub mod views;

use crate::app::EmotionApp;
use crate::model::AppState;
use crate::progress::PROGRESS_KEY;
use eframe::{App, Frame, set_value};
use egui::Context;
use layout::{badge_notice, bottom_panel, top_panel};

// Un salto mayor que la ventana de tolerancia podría saltarse una pregunta.
const MAX_FRAME_DT: f64 = 0.1;

impl App for EmotionApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_content();

        if self.state == AppState::Game {
            let dt = f64::from(ctx.input(|i| i.stable_dt)).min(MAX_FRAME_DT);
            self.drive_game(dt);
            ctx.request_repaint();
        } else if self.is_loading_content() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // La navegación se oculta durante el minijuego; se sale con su propio botón.
        if self.state != AppState::Game {
            top_panel(self, ctx);
        }
        bottom_panel(self, ctx);

        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::LevelMap => views::level_map::ui_level_map(self, ctx),
            AppState::Game => views::game::ui_game(self, ctx),
            AppState::FaceMuseum => views::museum::ui_face_museum(self, ctx),
            AppState::Badges => views::badges::ui_badges(self, ctx),
            AppState::Storyboard => views::story::ui_storyboard(self, ctx),
        }

        if !self.new_badges.is_empty() {
            badge_notice(self, ctx);
        }
        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, PROGRESS_KEY, &self.progress);
    }
}
