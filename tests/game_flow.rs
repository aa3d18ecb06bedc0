// Recorridos completos del minijuego con un reproductor manual, sin UI.

use emotion_quest::config::GameConfig;
use emotion_quest::data::read_game_data_embedded;
use emotion_quest::game::{EmotionGame, GameEvent, Playback, QuizResult, Stage, StarRating};
use emotion_quest::model::{Emotion, Question};

/// Reproductor cuya posición fija el propio test.
#[derive(Default)]
struct ManualPlayer {
    position: f64,
    playing: bool,
    pauses: usize,
}

impl Playback for ManualPlayer {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        Some(20.0)
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
        self.pauses += 1;
    }
}

fn joy() -> Emotion {
    Emotion {
        id: "joy".into(),
        name: "Joy".into(),
        images: vec!["/emotions/joy-1.svg".into()],
        video: Some("/videos/joy.mp4".into()),
        video_duration: Some(20.0),
        description: String::new(),
    }
}

fn question(id: &str, t: f64, correct: &str, wrong: &str) -> Question {
    Question {
        id: id.into(),
        emotion: "Joy".into(),
        timestamp: t,
        question: format!("{id}?"),
        options: vec![correct.into(), wrong.into()],
        correct_answer: correct.into(),
        feedback: Some("Look again!".into()),
        image: None,
    }
}

fn joy_session() -> (EmotionGame, ManualPlayer) {
    let game = EmotionGame::with_questions(
        1,
        Some(joy()),
        vec![
            question("q1", 3.0, "Smiling", "Frowning"),
            question("q2", 10.0, "Sharing", "Hiding"),
        ],
        GameConfig::default(),
    );
    (game, ManualPlayer::default())
}

fn at(game: &mut EmotionGame, player: &mut ManualPlayer, position: f64) {
    player.position = position;
    game.on_progress(player);
}

#[test]
fn joy_scenario_ends_with_three_stars() {
    let (mut game, mut player) = joy_session();
    game.tick(5.0, &mut player);
    assert_eq!(game.stage(), &Stage::Playing);
    assert!(player.playing);

    at(&mut game, &mut player, 0.0);
    at(&mut game, &mut player, 1.0);
    assert!(game.current_question().is_none());
    at(&mut game, &mut player, 2.9);
    assert_eq!(game.current_question().map(|q| q.id.as_str()), Some("q1"));
    assert!(!player.playing);

    assert_eq!(game.submit_answer("Frowning"), Some(QuizResult::Incorrect));
    assert_eq!(game.correct_answers(), 0);
    assert_eq!(game.current_question_index(), 0);
    assert_eq!(game.feedback(), Some("Look again!"));
    game.tick(1.5, &mut player);
    assert!(!player.playing);

    assert_eq!(game.submit_answer("Smiling"), Some(QuizResult::Correct));
    assert_eq!(game.correct_answers(), 1);
    assert_eq!(game.current_question_index(), 1);
    game.tick(1.5, &mut player);
    assert_eq!(game.stage(), &Stage::Playing);
    assert!(player.playing);

    at(&mut game, &mut player, 10.1);
    assert_eq!(game.current_question().map(|q| q.id.as_str()), Some("q2"));
    assert_eq!(game.submit_answer("Sharing"), Some(QuizResult::Correct));
    assert_eq!(game.correct_answers(), 2);
    assert_eq!(game.current_question_index(), 2);
    game.tick(1.5, &mut player);

    game.on_video_ended();
    assert_eq!(game.stars().map(StarRating::get), Some(3));
    game.tick(3.0, &mut player);

    let completions: Vec<u8> = game
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::Completed(stars) => Some(stars.get()),
            _ => None,
        })
        .collect();
    assert_eq!(completions, vec![3]);
}

#[test]
fn nothing_changes_after_completion() {
    let (mut game, mut player) = joy_session();
    game.tick(5.0, &mut player);
    game.on_video_ended();
    assert!(game.is_finished());
    let stage = game.stage().clone();

    game.on_video_ended();
    at(&mut game, &mut player, 3.0);
    assert_eq!(game.submit_answer("Smiling"), None);
    game.tick(10.0, &mut player);
    game.tick(10.0, &mut player);

    assert_eq!(game.stage(), &stage);
    assert_eq!(game.correct_answers(), 0);
    let completed = game
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Completed(_)))
        .count();
    assert_eq!(completed, 1);
    assert_eq!(game.stars().map(StarRating::get), Some(1));
}

#[test]
fn repeated_wrong_answers_are_idempotent() {
    let (mut game, mut player) = joy_session();
    game.tick(5.0, &mut player);
    at(&mut game, &mut player, 3.0);

    for _ in 0..3 {
        assert_eq!(game.submit_answer("Frowning"), Some(QuizResult::Incorrect));
        assert_eq!(game.correct_answers(), 0);
        assert_eq!(game.current_question_index(), 0);
        assert_eq!(game.selected_answer(), Some("Frowning"));
        game.tick(1.5, &mut player);
        assert_eq!(game.current_question().map(|q| q.id.as_str()), Some("q1"));
    }
}

#[test]
fn overlay_never_triggers_twice() {
    let (mut game, mut player) = joy_session();
    game.tick(5.0, &mut player);
    at(&mut game, &mut player, 3.0);
    at(&mut game, &mut player, 3.1);
    at(&mut game, &mut player, 2.8);
    assert_eq!(player.pauses, 1);

    let shown = game
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::QuestionShown { .. }))
        .count();
    assert_eq!(shown, 1);
}

#[test]
fn star_boundaries_with_four_questions() {
    assert_eq!(StarRating::from_score(0, 4).get(), 1);
    assert_eq!(StarRating::from_score(1, 4).get(), 1);
    assert_eq!(StarRating::from_score(2, 4).get(), 2);
    assert_eq!(StarRating::from_score(3, 4).get(), 3);
    assert_eq!(StarRating::from_score(0, 0).get(), 1);
}

#[test]
fn first_level_uses_embedded_joy_questions() {
    let data = read_game_data_embedded().expect("embedded data should parse");
    let bank = data.question_bank();
    let game = EmotionGame::new(1, &data.emotions, &bank, GameConfig::default());

    assert_eq!(game.emotion().map(|e| e.name.as_str()), Some("Joy"));
    let stamps: Vec<f64> = game.questions().iter().map(|q| q.timestamp).collect();
    assert_eq!(stamps, vec![3.0, 10.0]);
    assert_eq!(game.questions()[0].correct_answer, "Smiling");
    assert_eq!(game.questions()[1].correct_answer, "Sharing");

    let wrapped = EmotionGame::new(7, &data.emotions, &bank, GameConfig::default());
    assert_eq!(wrapped.emotion().map(|e| e.name.as_str()), Some("Joy"));
}
