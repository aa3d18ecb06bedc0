/// Transiciones diferidas que la sesión se programa a sí misma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm {
    CountdownTick,
    RevealQuestion,
    ClearResult,
    EmitCompletion,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: f64,
    seq: u64,
    alarm: Alarm,
}

/// Planificador propio de cada sesión.
///
/// El reloj solo avanza cuando el anfitrión llama a [`Timers::next_due`] /
/// [`Timers::settle`]; cancelar todo garantiza que ninguna alarma pendiente
/// vuelva a tocar una sesión terminada.
#[derive(Debug, Default)]
pub struct Timers {
    now: f64,
    seq: u64,
    pending: Vec<Scheduled>,
}

impl Timers {
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn schedule(&mut self, delay: f64, alarm: Alarm) {
        let delay = if delay.is_finite() { delay.max(0.0) } else { 0.0 };
        self.seq += 1;
        self.pending.push(Scheduled {
            due: self.now + delay,
            seq: self.seq,
            alarm,
        });
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Saca la siguiente alarma vencida antes de `until` y mueve el reloj a su vencimiento,
    /// de modo que lo que se reprograme desde el manejador cuente desde ese instante.
    pub fn next_due(&mut self, until: f64) -> Option<Alarm> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= until)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))?;
        let fired = self.pending.swap_remove(idx);
        self.now = self.now.max(fired.due);
        Some(fired.alarm)
    }

    pub fn settle(&mut self, until: f64) {
        self.now = self.now.max(until);
    }
}
