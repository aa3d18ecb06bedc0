// src/museum.rs

use crate::model::Emotion;

/// Estado de la galería de caras: qué emoción está abierta y qué foto del carrusel se ve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    selected: Option<usize>,
    image: usize,
}

impl Gallery {
    /// Abre la ficha de una emoción; el carrusel empieza por la portada.
    pub fn open<'e>(&mut self, index: usize, emotions: &'e [Emotion]) -> Option<&'e Emotion> {
        let emotion = emotions.get(index)?;
        self.selected = Some(index);
        self.image = 0;
        Some(emotion)
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.image = 0;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected<'e>(&self, emotions: &'e [Emotion]) -> Option<&'e Emotion> {
        self.selected.and_then(|idx| emotions.get(idx))
    }

    pub fn image_index(&self) -> usize {
        self.image
    }

    pub fn current_image<'e>(&self, emotions: &'e [Emotion]) -> Option<&'e str> {
        let emotion = self.selected(emotions)?;
        match emotion.images.get(self.image) {
            Some(image) => Some(image.as_str()),
            None => Some(emotion.cover_image()),
        }
    }

    // El carrusel da la vuelta en ambos sentidos.
    pub fn next_image(&mut self, emotions: &[Emotion]) {
        let count = self.image_count(emotions);
        if count > 0 {
            self.image = (self.image + 1) % count;
        }
    }

    pub fn previous_image(&mut self, emotions: &[Emotion]) {
        let count = self.image_count(emotions);
        if count > 0 {
            self.image = (self.image + count - 1) % count;
        }
    }

    fn image_count(&self, emotions: &[Emotion]) -> usize {
        self.selected(emotions).map_or(0, |e| e.images.len())
    }
}
