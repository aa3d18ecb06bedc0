use super::*;

impl EmotionApp {
    /// Borra todo el progreso guardado y vuelve al inicio.
    pub fn reset_progress(&mut self) {
        if let Some(mut active) = self.game.take() {
            active.session.exit();
        }
        self.progress = Progress::for_levels(&self.data.levels);
        self.story_walk = StoryWalk::new(&self.data.story);
        self.gallery.close();
        self.new_badges.clear();
        self.message.clear();
        self.confirm_reset = false;
        self.state = AppState::Home;
        log::info!("Progress reset");
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset progress")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to erase all your stars, badges and stories? This cannot be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, erase").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
