//! Minijuego de vídeo con preguntas.
//!
//! La sesión arranca con una cuenta atrás, reproduce el vídeo, lo pausa en las
//! marcas de tiempo del banco de preguntas, valida las respuestas y al terminar
//! el vídeo calcula las estrellas. El anfitrión le entrega cinco estímulos:
//! paso de tiempo ([`EmotionGame::tick`]), avance del vídeo
//! ([`EmotionGame::on_progress`]), respuesta ([`EmotionGame::submit_answer`]),
//! fin natural ([`EmotionGame::on_video_ended`]) y salida ([`EmotionGame::exit`]).

pub mod playback;
pub mod scoring;
pub mod stage;
pub mod timers;
pub mod view;

pub use playback::{Playback, SimulatedPlayer};
pub use scoring::StarRating;
pub use stage::{GameEvent, QuizResult, Stage, StageKind};
pub use view::{GameView, OptionState};

use crate::config::{GameConfig, MatchPolicy};
use crate::data::QuestionBank;
use crate::model::{Emotion, Question};
use timers::{Alarm, Timers};

/// Emoción que corresponde a un nivel: `(level_id - 1) mod n`.
pub fn emotion_for_level(level_id: u32, emotions: &[Emotion]) -> Option<&Emotion> {
    if emotions.is_empty() {
        return None;
    }
    let idx = (level_id.saturating_sub(1) as usize) % emotions.len();
    emotions.get(idx)
}

pub struct EmotionGame {
    level_id: u32,
    config: GameConfig,
    emotion: Option<Emotion>,
    questions: Vec<Question>,
    stage: Stage,
    current_question: usize,
    correct_answers: usize,
    timers: Timers,
    events: Vec<GameEvent>,
    completion_emitted: bool,
}

impl EmotionGame {
    pub fn new(level_id: u32, emotions: &[Emotion], bank: &QuestionBank, config: GameConfig) -> Self {
        let emotion = emotion_for_level(level_id, emotions).cloned();
        let questions = emotion
            .as_ref()
            .map(|e| bank.questions_for(&e.name))
            .unwrap_or_default();
        if emotion.is_none() {
            log::warn!("No emotion available for level {level_id}; the session will end right after the countdown");
        }
        Self::with_questions(level_id, emotion, questions, config)
    }

    pub fn with_questions(
        level_id: u32,
        emotion: Option<Emotion>,
        questions: Vec<Question>,
        config: GameConfig,
    ) -> Self {
        let mut timers = Timers::default();
        // Con cuenta atrás 0 el primer tic llega sin esperar.
        let first_tick = if config.countdown == 0 { 0.0 } else { 1.0 };
        timers.schedule(first_tick, Alarm::CountdownTick);

        log::info!(
            "Level {level_id}: starting session for {} with {} question(s)",
            emotion.as_ref().map(|e| e.name.as_str()).unwrap_or("<none>"),
            questions.len()
        );

        Self {
            level_id,
            stage: Stage::Preparation {
                remaining: config.countdown,
            },
            config,
            emotion,
            questions,
            current_question: 0,
            correct_answers: 0,
            timers,
            events: Vec::new(),
            completion_emitted: false,
        }
    }

    // ---------------------------------------------------------------- lecturas

    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn emotion(&self) -> Option<&Emotion> {
        self.emotion.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Pregunta superpuesta al vídeo, si la hay.
    pub fn current_question(&self) -> Option<&Question> {
        self.stage
            .overlay_question()
            .and_then(|idx| self.questions.get(idx))
    }

    pub fn selected_answer(&self) -> Option<&str> {
        match &self.stage {
            Stage::Resolved { answer, .. } => Some(answer.as_str()),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<QuizResult> {
        match self.stage {
            Stage::Resolved { correct: true, .. } => Some(QuizResult::Correct),
            Stage::Resolved { correct: false, .. } => Some(QuizResult::Incorrect),
            _ => None,
        }
    }

    /// Mensaje de ayuda tras un fallo.
    pub fn feedback(&self) -> Option<&str> {
        match self.stage {
            Stage::Resolved {
                question,
                correct: false,
                ..
            } => self
                .questions
                .get(question)
                .and_then(|q| q.feedback.as_deref()),
            _ => None,
        }
    }

    pub fn countdown_remaining(&self) -> Option<u32> {
        match self.stage {
            Stage::Preparation { remaining } => Some(remaining),
            _ => None,
        }
    }

    pub fn stars(&self) -> Option<StarRating> {
        match self.stage {
            Stage::Complete { stars } => Some(stars),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stage.is_terminal()
    }

    /// `true` mientras quede alguna transición diferida por ejecutar.
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_idle()
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            level_id: self.level_id,
            stage: self.stage.kind(),
            countdown: self.countdown_remaining(),
            countdown_total: self.config.countdown,
            emotion: self.emotion.as_ref(),
            question: self.current_question(),
            question_number: self.stage.overlay_question().map_or(0, |i| i + 1),
            total_questions: self.questions.len(),
            selected_answer: self.selected_answer(),
            result: self.result(),
            feedback: self.feedback(),
            correct_answers: self.correct_answers,
            stars: self.stars(),
        }
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------- estímulos

    /// Avanza el reloj de la sesión `dt` segundos y ejecuta las alarmas vencidas, en orden.
    pub fn tick<P: Playback + ?Sized>(&mut self, dt: f64, player: &mut P) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let until = self.timers.now() + dt;
        while let Some(alarm) = self.timers.next_due(until) {
            self.on_alarm(alarm, player);
        }
        self.timers.settle(until);
    }

    /// Comprueba la posición del vídeo contra la pregunta actual.
    pub fn on_progress<P: Playback + ?Sized>(&mut self, player: &mut P) {
        if self.stage != Stage::Playing {
            return;
        }
        let position = player.current_time();
        let Some(question) = self.questions.get(self.current_question) else {
            return;
        };
        if !self.is_due(question.timestamp, position) {
            return;
        }

        player.pause();
        let index = self.current_question;
        log::debug!(
            "Pausing at {position:.2}s for question {} (t={:.2}s)",
            question.id,
            question.timestamp
        );

        if self.config.reveal_delay > 0.0 {
            self.stage = Stage::Revealing { question: index };
            self.timers
                .schedule(self.config.reveal_delay, Alarm::RevealQuestion);
        } else {
            self.show_question(index);
        }
    }

    /// Juzga una respuesta. Devuelve `None` si ahora mismo no se acepta ninguna.
    pub fn submit_answer(&mut self, answer: &str) -> Option<QuizResult> {
        let Stage::AwaitingAnswer { question, attempt } = self.stage else {
            return None;
        };
        let correct = self.questions.get(question)?.is_correct(answer);

        if correct {
            self.correct_answers += 1;
            self.current_question += 1;
        }
        log::debug!(
            "Question {question} attempt {attempt}: {:?} is {}",
            answer,
            if correct { "correct" } else { "incorrect" }
        );

        self.stage = Stage::Resolved {
            question,
            answer: answer.to_string(),
            correct,
            attempt,
        };
        self.events.push(GameEvent::Answered {
            index: question,
            correct,
        });
        self.timers
            .schedule(self.config.feedback_delay, Alarm::ClearResult);

        Some(if correct {
            QuizResult::Correct
        } else {
            QuizResult::Incorrect
        })
    }

    /// Fin natural del vídeo: única vía hacia `Complete`.
    pub fn on_video_ended(&mut self) {
        match self.stage {
            Stage::Playing
            | Stage::Revealing { .. }
            | Stage::AwaitingAnswer { .. }
            | Stage::Resolved { .. } => self.finish(),
            Stage::Preparation { .. } | Stage::Complete { .. } | Stage::Exited => {}
        }
    }

    /// Salida pedida por el usuario. Cancela todo lo pendiente.
    pub fn exit(&mut self) {
        if self.stage == Stage::Exited {
            return;
        }
        self.timers.cancel_all();
        self.stage = Stage::Exited;
        self.events.push(GameEvent::Exited);
        log::info!("Level {}: session exited", self.level_id);
    }

    // ------------------------------------------------------------- internos

    fn is_due(&self, timestamp: f64, position: f64) -> bool {
        let tolerance = self.config.match_tolerance;
        match self.config.match_policy {
            MatchPolicy::Sequential => (timestamp - position).abs() < tolerance,
            MatchPolicy::CatchUp => position > timestamp - tolerance,
        }
    }

    fn show_question(&mut self, index: usize) {
        self.stage = Stage::AwaitingAnswer {
            question: index,
            attempt: 1,
        };
        self.events.push(GameEvent::QuestionShown { index });
    }

    fn start_playback<P: Playback + ?Sized>(&mut self, player: &mut P) {
        if self.emotion.as_ref().and_then(|e| e.video.as_ref()).is_none() {
            // Sin vídeo no hay nada que esperar: se puntúa con cero preguntas.
            log::warn!("Level {}: no video to play, completing right away", self.level_id);
            self.questions.clear();
            self.finish();
            return;
        }
        self.stage = Stage::Playing;
        player.play();
    }

    fn finish(&mut self) {
        self.timers.cancel_all();
        let stars = StarRating::from_score(self.correct_answers, self.questions.len());
        log::info!(
            "Level {}: {}/{} correct, {} star(s)",
            self.level_id,
            self.correct_answers,
            self.questions.len(),
            stars.get()
        );
        self.stage = Stage::Complete { stars };
        self.events.push(GameEvent::Celebrate);
        self.timers
            .schedule(self.config.celebration_delay, Alarm::EmitCompletion);
    }

    fn on_alarm<P: Playback + ?Sized>(&mut self, alarm: Alarm, player: &mut P) {
        match (alarm, &self.stage) {
            (Alarm::CountdownTick, &Stage::Preparation { remaining }) => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.start_playback(player);
                } else {
                    self.stage = Stage::Preparation { remaining };
                    self.timers.schedule(1.0, Alarm::CountdownTick);
                }
            }
            (Alarm::RevealQuestion, &Stage::Revealing { question }) => {
                self.show_question(question);
            }
            (
                Alarm::ClearResult,
                &Stage::Resolved {
                    question,
                    correct,
                    attempt,
                    ..
                },
            ) => {
                if correct {
                    self.stage = Stage::Playing;
                    player.play();
                } else {
                    // La misma pregunta sigue vigente; el vídeo sigue en pausa.
                    self.stage = Stage::AwaitingAnswer {
                        question,
                        attempt: attempt + 1,
                    };
                }
            }
            (Alarm::EmitCompletion, &Stage::Complete { stars }) if !self.completion_emitted => {
                self.completion_emitted = true;
                self.events.push(GameEvent::Completed(stars));
            }
            (alarm, stage) => {
                log::debug!("Ignoring stale alarm {alarm:?} in stage {stage:?}");
            }
        }
    }
}
