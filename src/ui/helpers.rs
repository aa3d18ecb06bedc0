// src/ui/helpers.rs
use crate::game::OptionState;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Botón de respuesta coloreado según el resultado.
pub fn answer_button(ui: &mut Ui, label: &str, width: f32, state: OptionState, enabled: bool) -> bool {
    let button = match state {
        OptionState::Idle => Button::new(label),
        OptionState::Correct => Button::new(RichText::new(format!("✔ {label}")).color(Color32::WHITE))
            .fill(Color32::from_rgb(34, 139, 34)),
        OptionState::Wrong => Button::new(RichText::new(format!("✖ {label}")).color(Color32::WHITE))
            .fill(Color32::DARK_RED),
    };
    ui.add_enabled(enabled, button.min_size(Vec2::new(width, 40.0)))
        .clicked()
}

/// Cara que representa cada emoción mientras no hay imágenes cargadas.
pub fn emotion_face(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "joy" | "happy" | "happiness" => "😊",
        "sadness" | "sad" => "😢",
        "anger" | "angry" => "😠",
        "fear" | "scared" => "😨",
        "surprise" | "surprised" => "😲",
        "disgust" => "🤢",
        "proud" => "😌",
        "regret" | "disappointed" => "😞",
        "understood" => "🤗",
        "bottled-up" => "😶",
        _ => "🙂",
    }
}

pub fn big_face(ui: &mut Ui, name: &str, size: f32) {
    ui.label(RichText::new(emotion_face(name)).size(size));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_ignore_case() {
        assert_eq!(emotion_face("Joy"), "😊");
        assert_eq!(emotion_face("FEAR"), "😨");
        assert_eq!(emotion_face("curiosity"), "🙂");
    }
}
