use crate::app::EmotionApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut EmotionApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let entries = [
                (AppState::Home, "🏠 Home"),
                (AppState::LevelMap, "🗺 Levels"),
                (AppState::FaceMuseum, "🖼 Face Museum"),
                (AppState::Badges, "🏆 Trophy Room"),
                (AppState::Storyboard, "📖 Storyboard"),
            ];
            for (state, label) in entries {
                if ui.selectable_label(app.state == state, label).clicked() {
                    match state {
                        AppState::Home => app.go_home(),
                        AppState::LevelMap => app.open_level_map(),
                        AppState::FaceMuseum => app.open_museum(),
                        AppState::Badges => app.open_badges(),
                        AppState::Storyboard => app.open_storyboard(),
                        AppState::Game => {}
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "⭐ {}/{}",
                    app.progress.total_stars(),
                    app.progress.max_stars()
                ));
                if app.is_loading_content() {
                    ui.spinner();
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut EmotionApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if app.state != AppState::Game && ui.button("🔄 Reset progress").clicked() {
                app.confirm_reset = true;
            }
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Ventana con las insignias recién conseguidas.
pub fn badge_notice(app: &mut EmotionApp, ctx: &Context) {
    let fresh = app.new_badge_infos();
    if fresh.is_empty() {
        app.dismiss_badge_notice();
        return;
    }
    egui::Window::new("New Badge Unlocked!")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                for badge in &fresh {
                    ui.heading(badge.label());
                    ui.label(&badge.description);
                    ui.add_space(8.0);
                }
                if ui.button("Close").clicked() {
                    app.dismiss_badge_notice();
                }
            });
        });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}
