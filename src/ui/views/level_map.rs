use crate::EmotionApp;
use crate::ui::helpers::big_list_button;
use crate::view_models::LevelInfo;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_level_map(app: &mut EmotionApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 440.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 44.0;

        let infos: Vec<LevelInfo> = app.level_infos();

        let estimated_h = 120.0 + (button_h + 26.0) * (infos.len() as f32 + 1.0);
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading("Choose your level");
                        if !app.message.is_empty() {
                            ui.add_space(6.0);
                            ui.label(RichText::new(&app.message).strong());
                        }
                        ui.add_space(16.0);

                        for info in &infos {
                            let clicked = big_list_button(ui, info.label(), content_width, button_h, info.unlocked);
                            ui.label(RichText::new(&info.description).small().weak());
                            if clicked {
                                app.start_level(info.id);
                                return;
                            }
                            ui.add_space(8.0);
                        }

                        ui.add_space(12.0);
                        if ui.add_sized([content_width, 36.0], Button::new("Back")).clicked() {
                            app.go_home();
                        }
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}
