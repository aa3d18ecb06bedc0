use crate::EmotionApp;
use crate::ui::helpers::big_face;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_storyboard(app: &mut EmotionApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Storyboard").size(30.0));
            ui.label("Choose different paths to see how emotions affect outcomes.");
            ui.add_space(16.0);

            let Some(node) = app.story_walk.current(&app.data.story).cloned() else {
                ui.label("This story is not available right now.");
                return;
            };

            if let Some(image) = &node.image {
                ui.label(RichText::new(image).small().weak());
            }
            ui.label(RichText::new(&node.text).size(18.0));
            ui.add_space(14.0);

            let mut chosen = None;
            let btn_w = (ui.available_width() * 0.8).clamp(160.0, 420.0);
            for option in &node.options {
                if ui.add_sized([btn_w, 38.0], Button::new(&option.text)).clicked() {
                    chosen = Some(option.id.clone());
                }
                ui.add_space(4.0);
            }

            if node.ending {
                if let Some(emotion) = &node.emotion {
                    ui.add_space(10.0);
                    big_face(ui, emotion, 48.0);
                    ui.label(RichText::new(format!("You learned about: {emotion}")).strong());
                    ui.label("Great job completing this story!");
                }
            }

            ui.add_space(10.0);
            if ui
                .add_enabled(app.story_walk.can_go_back(), Button::new("⬅ Back"))
                .clicked()
            {
                app.story_back();
            }

            if let Some(option_id) = chosen {
                app.choose_story_option(&option_id);
            }
        });
    });
}
