use crate::EmotionApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_home(app: &mut EmotionApp, ctx: &Context) {
    centered_panel(ctx, 380.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Emotion Quest").size(34.0));
            ui.add_space(6.0);
            ui.label("Learn about feelings by watching, playing and telling stories.");
            ui.add_space(20.0);

            if !app.message.is_empty() {
                ui.label(RichText::new(&app.message).strong());
                ui.add_space(10.0);
            }

            let btn_w = (ui.available_width() * 0.9).clamp(160.0, 400.0);
            let btn_h = 44.0;

            let completed = app.progress.completed_count();
            let play_label = if completed == 0 {
                "▶ Start playing".to_string()
            } else {
                format!("▶ Continue ({completed}/{} levels)", app.progress.levels.len())
            };
            if ui.add_sized([btn_w, btn_h], Button::new(play_label)).clicked() {
                app.open_level_map();
            }
            ui.add_space(6.0);
            if ui.add_sized([btn_w, btn_h], Button::new("🖼 Face Museum")).clicked() {
                app.open_museum();
            }
            ui.add_space(6.0);
            if ui.add_sized([btn_w, btn_h], Button::new("📖 Storyboard")).clicked() {
                app.open_storyboard();
            }
            ui.add_space(6.0);
            if ui.add_sized([btn_w, btn_h], Button::new("🏆 Trophy Room")).clicked() {
                app.open_badges();
            }
        });
    });
}
