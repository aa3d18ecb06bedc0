use crate::EmotionApp;
use crate::ui::helpers::{big_face, emotion_face};
use crate::ui::layout::two_button_row;
use egui::{Button, CentralPanel, Context, RichText, ScrollArea, Vec2};

pub fn ui_face_museum(app: &mut EmotionApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Face Museum").size(30.0));
            ui.label("Explore faces and discover the feelings behind them.");
        });
        ui.add_space(16.0);

        if app.gallery.is_open() {
            detail_card(app, ui);
            return;
        }

        let mut opened = None;
        ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = Vec2::new(12.0, 12.0);
                for (idx, emotion) in app.emotions.iter().enumerate() {
                    let seen = app.progress.viewed_emotions.contains(&emotion.name);
                    let label = format!(
                        "{}\n{}{}",
                        emotion_face(&emotion.name),
                        emotion.name,
                        if seen { " ✔" } else { "" }
                    );
                    if ui
                        .add(Button::new(RichText::new(label).size(20.0)).min_size(Vec2::new(150.0, 110.0)))
                        .clicked()
                    {
                        opened = Some(idx);
                    }
                }
            });
        });

        if let Some(idx) = opened {
            app.view_emotion(idx);
        }
    });
}

fn detail_card(app: &mut EmotionApp, ui: &mut egui::Ui) {
    let Some(emotion) = app.gallery.selected(&app.emotions) else {
        app.gallery.close();
        return;
    };
    let name = emotion.name.clone();
    let description = emotion.description.clone();
    let image_count = emotion.images.len().max(1);
    let image = app
        .gallery
        .current_image(&app.emotions)
        .unwrap_or_default()
        .to_string();

    ui.vertical_centered(|ui| {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(24, 16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width().min(480.0));
                ui.vertical_centered(|ui| {
                    ui.heading(&name);
                    big_face(ui, &name, 110.0);
                    ui.label(RichText::new(&image).small().weak());
                    ui.label(format!("Photo {} of {image_count}", app.gallery.image_index() + 1));

                    let (previous, next) = two_button_row(ui, 260.0, "◀ Previous", "Next ▶");
                    if previous {
                        app.gallery.previous_image(&app.emotions);
                    }
                    if next {
                        app.gallery.next_image(&app.emotions);
                    }
                    ui.add_space(10.0);
                    ui.label(&description);
                    ui.add_space(10.0);
                    if ui.button("Back to gallery").clicked() {
                        app.gallery.close();
                    }
                });
            });
    });
}
