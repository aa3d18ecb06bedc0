use crate::EmotionApp;
use egui::{CentralPanel, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_badges(app: &mut EmotionApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let infos = app.badge_infos();
        let percentage = app.badge_percentage();

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Trophy Room").size(30.0));
            ui.label("Collect badges as you learn and grow on your emotional journey.");
            ui.add_space(12.0);

            let bar_w = ui.available_width().min(420.0);
            ui.add(
                ProgressBar::new(percentage as f32 / 100.0)
                    .desired_width(bar_w)
                    .text(format!("Your progress: {percentage}%")),
            );
            ui.add_space(16.0);
        });

        ScrollArea::vertical().show(ui, |ui| {
            let columns = ((ui.available_width() / 200.0).floor() as usize).clamp(1, 4);
            egui::Grid::new("badge_grid")
                .num_columns(columns)
                .spacing([16.0, 16.0])
                .show(ui, |ui| {
                    for (i, badge) in infos.iter().enumerate() {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(170.0);
                            ui.vertical_centered(|ui| {
                                let icon = if badge.unlocked { badge.icon.as_str() } else { "🔒" };
                                ui.label(RichText::new(icon).size(40.0));
                                let name = RichText::new(&badge.name).strong();
                                ui.label(if badge.unlocked { name } else { name.weak() });
                                ui.label(RichText::new(&badge.description).small());
                            });
                        });
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    });
}
