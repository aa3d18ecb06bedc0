use crate::EmotionApp;
use crate::game::{GameView, Playback, QuizResult, StageKind};
use crate::ui::helpers::{answer_button, big_face};
use egui::{Align, Button, CentralPanel, Color32, Context, ProgressBar, RichText, Ui};

pub fn ui_game(app: &mut EmotionApp, ctx: &Context) {
    let mut chosen: Option<String> = None;
    let mut exit = false;

    CentralPanel::default().show(ctx, |ui| {
        let Some(active) = app.game.as_ref() else {
            exit = ui.button("Back to levels").clicked();
            return;
        };
        let view = active.session.view();
        let max_width = 640.0;
        let width = ui.available_width().min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_max_width(width);
            ui.horizontal(|ui| {
                ui.heading(format!("Level {}", view.level_id));
                if view.stage != StageKind::Complete {
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        exit = ui.button("✖ Exit").clicked();
                    });
                }
            });
            ui.separator();
            ui.add_space(12.0);

            match view.stage {
                StageKind::Preparation => preparation(ui, &view),
                StageKind::Playback => {
                    let position = active.player.current_time();
                    let duration = active.player.duration().unwrap_or_default();
                    let icon = if active.player.has_ended() {
                        "⏹"
                    } else if active.player.is_playing() {
                        "▶"
                    } else {
                        "⏸"
                    };
                    playback(ui, &view, icon, position, duration, active.player.progress_fraction());
                    if view.question.is_some() {
                        ui.add_space(16.0);
                        chosen = question_overlay(ui, &view, width);
                    }
                }
                StageKind::Complete => complete(ui, &view),
                StageKind::Exited => {
                    ui.label("Leaving the game…");
                }
            }
        });
    });

    if let Some(answer) = chosen {
        app.answer(&answer);
    }
    if exit {
        app.exit_game();
    }
}

fn preparation(ui: &mut Ui, view: &GameView<'_>) {
    let name = view.emotion.map(|e| e.name.as_str()).unwrap_or("?");
    ui.label(RichText::new(format!("Get ready to watch {name}!")).size(22.0));
    ui.add_space(20.0);
    if let Some(remaining) = view.countdown {
        ui.label(RichText::new(remaining.to_string()).size(72.0).strong());
    }
    ui.add(ProgressBar::new(view.countdown_fraction()).desired_width(240.0));
}

fn playback(ui: &mut Ui, view: &GameView<'_>, icon: &str, position: f64, duration: f64, fraction: f32) {
    match view.emotion {
        Some(emotion) => {
            big_face(ui, &emotion.name, 96.0);
            ui.label(RichText::new(&emotion.name).size(24.0).strong());
            if let Some(video) = &emotion.video {
                ui.label(RichText::new(video).small().weak());
            }
        }
        None => {
            ui.label("No video available for this level.");
        }
    }
    ui.add_space(8.0);
    ui.add(
        ProgressBar::new(fraction)
            .desired_width(ui.available_width().min(480.0))
            .text(format!("{icon} {position:.1}s / {duration:.1}s")),
    );
    ui.label(format!(
        "Correct answers: {} / {}",
        view.correct_answers, view.total_questions
    ));
}

/// Devuelve la opción pulsada, si alguna.
fn question_overlay(ui: &mut Ui, view: &GameView<'_>, width: f32) -> Option<String> {
    let question = view.question?;
    let mut chosen = None;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(width * 0.9);
            ui.label(
                RichText::new(format!(
                    "Question {} of {}",
                    view.question_number, view.total_questions
                ))
                .small(),
            );
            ui.label(RichText::new(&question.question).size(20.0).strong());
            ui.add_space(10.0);

            let enabled = view.answers_enabled();
            for option in &question.options {
                if answer_button(ui, option, width * 0.8, view.option_state(option), enabled) {
                    chosen = Some(option.clone());
                }
                ui.add_space(4.0);
            }

            match view.result {
                Some(QuizResult::Correct) => {
                    ui.label(RichText::new("Great job! That's right!").color(Color32::from_rgb(34, 139, 34)));
                }
                Some(QuizResult::Incorrect) => {
                    ui.label(RichText::new("Not quite, try again!").color(Color32::LIGHT_RED));
                    if let Some(feedback) = view.feedback {
                        ui.label(format!("💡 {feedback}"));
                    }
                }
                None => {}
            }
        });
    chosen
}

fn complete(ui: &mut Ui, view: &GameView<'_>) {
    ui.label(RichText::new("🎉 Level complete! 🎉").size(30.0).strong());
    ui.add_space(12.0);
    if let Some(stars) = view.stars {
        ui.label(RichText::new(stars.to_string()).size(56.0).color(Color32::GOLD));
    }
    ui.label(format!(
        "You answered {} of {} questions.",
        view.correct_answers, view.total_questions
    ));
    ui.add_space(8.0);
    ui.add_enabled(false, Button::new("Saving your stars…"));
}
