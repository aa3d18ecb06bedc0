// src/data.rs

use crate::badges::Badge;
use crate::error::{ContentError, Result};
use crate::model::{Emotion, Level, Question};
use crate::story::Story;
use serde::Deserialize;

/// Contenido embebido en el binario (equivalente al data.json de la web).
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GameData {
    pub emotions: Vec<Emotion>,
    pub questions: Vec<Question>,
    pub levels: Vec<Level>,
    pub badges: Vec<Badge>,
    pub story: Story,
}

impl GameData {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let data: GameData = serde_yaml::from_str(text)?;
        data.story.validate().map_err(ContentError::Invalid)?;
        Ok(data)
    }

    pub fn question_bank(&self) -> QuestionBank {
        QuestionBank::new(self.questions.clone())
    }
}

/// Carga el fixture desde el YAML embebido
pub fn read_game_data_embedded() -> Result<GameData> {
    let file_content = include_str!("data/game_data.yaml");
    GameData::from_yaml(file_content)
}

/// Banco completo de preguntas, ya filtrado de entradas imposibles de acertar.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        let questions = questions
            .into_iter()
            .filter(|q| {
                let ok = q.is_well_formed();
                if !ok {
                    log::warn!(
                        "Rejecting question {} ({}): correct answer {:?} is not among its options",
                        q.id,
                        q.emotion,
                        q.correct_answer
                    );
                }
                ok
            })
            .collect();
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Preguntas de una emoción en el orden de la fuente.
    ///
    /// El emparejamiento por índice asume marcas de tiempo ascendentes; si no lo
    /// son solo se avisa, no se reordena.
    pub fn questions_for(&self, emotion_name: &str) -> Vec<Question> {
        let selected: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.emotion == emotion_name)
            .cloned()
            .collect();

        let ascending = selected
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp);
        if !ascending {
            log::warn!(
                "Questions for {emotion_name} are not sorted by timestamp; later ones may never trigger"
            );
        }
        selected
    }
}

/// Busca las preguntas de una emoción en los datos locales.
/// Cualquier error se registra y se traduce en una lista vacía.
pub fn load_questions(emotion_name: &str) -> Vec<Question> {
    match read_game_data_embedded() {
        Ok(data) => data.question_bank().questions_for(emotion_name),
        Err(err) => {
            log::error!("Error loading questions: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, emotion: &str, t: f64, correct: &str) -> Question {
        Question {
            id: id.into(),
            emotion: emotion.into(),
            timestamp: t,
            question: format!("Question {id}?"),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_answer: correct.into(),
            feedback: None,
            image: None,
        }
    }

    #[test]
    fn embedded_fixture_parses() {
        let data = read_game_data_embedded().expect("fixture should parse");
        assert!(!data.emotions.is_empty());
        assert_eq!(data.levels.len(), 6);
        assert_eq!(data.badges.len(), 9);
        assert!(data.questions.iter().all(Question::is_well_formed));
    }

    #[test]
    fn filter_preserves_source_order() {
        let bank = QuestionBank::new(vec![
            question("1", "Joy", 3.0, "A"),
            question("2", "Sadness", 1.0, "B"),
            question("3", "Joy", 10.0, "C"),
        ]);
        let ids: Vec<_> = bank.questions_for("Joy").into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn unsorted_bank_is_kept_as_is() {
        let bank = QuestionBank::new(vec![
            question("late", "Joy", 10.0, "A"),
            question("early", "Joy", 3.0, "A"),
        ]);
        let ids: Vec<_> = bank.questions_for("Joy").into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn malformed_questions_are_rejected() {
        let bank = QuestionBank::new(vec![
            question("ok", "Joy", 3.0, "A"),
            question("broken", "Joy", 5.0, "Z"),
        ]);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions_for("Joy")[0].id, "ok");
    }

    #[test]
    fn unknown_emotion_yields_empty_sequence() {
        assert!(load_questions("Nonexistent").is_empty());
    }

    #[test]
    fn question_accepts_legacy_field_names() {
        let yaml = r#"
id: q1
emotion: Joy
time: 3.0
question: What is she doing?
options: [Smiling, Frowning]
correctOption: Smiling
"#;
        let q: Question = serde_yaml::from_str(yaml).expect("valid question");
        assert_eq!(q.timestamp, 3.0);
        assert_eq!(q.correct_answer, "Smiling");
        assert!(q.feedback.is_none());
    }
}
