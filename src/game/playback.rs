/// Recurso de reproducción que la sesión controla de forma cooperativa.
///
/// El aviso de fin natural no forma parte del trait: lo entrega el anfitrión
/// llamando a `EmotionGame::on_video_ended`.
pub trait Playback {
    /// Posición actual en segundos.
    fn current_time(&self) -> f64;
    fn duration(&self) -> Option<f64>;
    fn play(&mut self);
    fn pause(&mut self);
}

/// Vídeo simulado: un reloj que avanza con el tiempo del anfitrión mientras no esté en pausa.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPlayer {
    position: f64,
    duration: f64,
    playing: bool,
    ended: bool,
    end_reported: bool,
}

impl SimulatedPlayer {
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(0.0),
            playing: false,
            ended: false,
            end_reported: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn advance(&mut self, dt: f64) {
        if !self.playing || self.ended || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.position = (self.position + dt).min(self.duration);
        if self.position >= self.duration {
            self.playing = false;
            self.ended = true;
        }
    }

    /// Salta a una posición, como haría el usuario arrastrando la barra.
    pub fn seek(&mut self, position: f64) {
        self.position = position.clamp(0.0, self.duration);
        self.ended = self.position >= self.duration;
    }

    /// Devuelve `true` una única vez, cuando el vídeo acaba de terminar.
    pub fn take_ended(&mut self) -> bool {
        if self.ended && !self.end_reported {
            self.end_reported = true;
            true
        } else {
            false
        }
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            0.0
        } else {
            (self.position / self.duration) as f32
        }
    }
}

impl Playback for SimulatedPlayer {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn play(&mut self) {
        if !self.ended {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }
}
