use super::*;

impl EmotionApp {
    /// Pide la colección remota en segundo plano; hasta entonces se usan las del fixture.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn start_content_fetch(&mut self) {
        use crate::content::{FixtureSource, RemoteSource, spawn_fetch};

        let remote = match RemoteSource::new(self.content.clone()) {
            Ok(remote) => remote,
            Err(err) => {
                log::info!("Using embedded emotions: {err}");
                return;
            }
        };
        let fallback = FixtureSource::new(self.data.emotions.clone());
        self.pending_emotions = Some(spawn_fetch(remote, fallback));
    }

    #[cfg(target_arch = "wasm32")]
    pub fn start_content_fetch(&mut self) {
        log::info!("Using embedded emotions");
    }

    /// Recoge el resultado de la descarga si ya llegó.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn poll_content(&mut self) {
        use std::sync::mpsc::TryRecvError;

        let received = match &self.pending_emotions {
            Some(rx) => rx.try_recv(),
            None => return,
        };
        match received {
            Ok(emotions) => {
                self.pending_emotions = None;
                self.replace_emotions(emotions);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::warn!("Emotion fetch thread ended without an answer");
                self.pending_emotions = None;
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn poll_content(&mut self) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn is_loading_content(&self) -> bool {
        self.pending_emotions.is_some()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn is_loading_content(&self) -> bool {
        false
    }

    /// Cambia el catálogo de emociones. La sesión en curso conserva la suya.
    pub fn replace_emotions(&mut self, emotions: Vec<Emotion>) {
        if emotions.is_empty() {
            log::warn!("Keeping current emotions: the new list is empty");
            return;
        }
        log::info!("Using {} emotion(s)", emotions.len());
        self.emotions = emotions;
        self.gallery.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EmotionSource, FixtureSource};

    fn app() -> EmotionApp {
        let data = read_game_data_embedded().expect("fixture should parse");
        let content = ContentConfig {
            offline: true,
            ..ContentConfig::default()
        };
        EmotionApp::with_data(data, Progress::default(), GameConfig::default(), content)
    }

    #[test]
    fn offline_mode_keeps_fixture_emotions() {
        let mut app = app();
        app.start_content_fetch();
        assert!(!app.is_loading_content());
        app.poll_content();
        assert_eq!(app.emotions.len(), 6);
    }

    #[test]
    fn empty_replacement_is_ignored() {
        let mut app = app();
        app.replace_emotions(Vec::new());
        assert_eq!(app.emotions.len(), 6);

        let joy = FixtureSource::new(app.emotions[..1].to_vec())
            .list_emotions()
            .expect("fixture source never fails");
        app.gallery.open(3, &app.emotions);
        app.replace_emotions(joy);
        assert_eq!(app.emotions.len(), 1);
        assert!(!app.gallery.is_open());
    }
}
