use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoryOption {
    pub id: String,
    pub text: String,
    pub next: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoryNode {
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    pub options: Vec<StoryOption>,
    #[serde(default)]
    pub ending: bool,
    /// Emoción aprendida al llegar a un final.
    #[serde(default)]
    pub emotion: Option<String>,
}

/// Historia ramificada: nodos indexados por id más el nodo inicial.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Story {
    pub start: String,
    pub nodes: BTreeMap<String, StoryNode>,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            start: "start".to_string(),
            nodes: BTreeMap::new(),
        }
    }
}

impl Story {
    pub fn node(&self, id: &str) -> Option<&StoryNode> {
        self.nodes.get(id)
    }

    /// Comprueba que el inicio exista y que ninguna opción apunte a un nodo inexistente.
    pub fn validate(&self) -> Result<(), String> {
        if !self.nodes.contains_key(&self.start) {
            return Err(format!("story start node {:?} does not exist", self.start));
        }
        for (id, node) in &self.nodes {
            if let Some(option) = node.options.iter().find(|o| !self.nodes.contains_key(&o.next)) {
                return Err(format!(
                    "story node {id:?} option {:?} points to missing node {:?}",
                    option.id, option.next
                ));
            }
        }
        Ok(())
    }

    pub fn ending_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.ending)
            .map(|(id, _)| id.as_str())
    }

    pub fn ending_count(&self) -> usize {
        self.ending_ids().count()
    }
}

/// Resultado de elegir una opción.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryStep {
    Moved,
    ReachedEnding { node: String },
    Restarted,
}

/// Recorrido del usuario por la historia. El camino nunca queda vacío.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryWalk {
    start: String,
    path: Vec<String>,
}

impl StoryWalk {
    pub fn new(story: &Story) -> Self {
        Self {
            start: story.start.clone(),
            path: vec![story.start.clone()],
        }
    }

    pub fn current_id(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or(&self.start)
    }

    pub fn current<'s>(&self, story: &'s Story) -> Option<&'s StoryNode> {
        story.node(self.current_id())
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn can_go_back(&self) -> bool {
        self.path.len() > 1
    }

    /// Elegir en un nodo final empieza una historia nueva.
    pub fn choose(&mut self, story: &Story, option_id: &str) -> Option<StoryStep> {
        let node = self.current(story)?;
        let option = node.options.iter().find(|o| o.id == option_id)?;

        if node.ending {
            self.path = vec![self.start.clone()];
            return Some(StoryStep::Restarted);
        }

        let next = option.next.clone();
        let reached_ending = story.node(&next).is_some_and(|n| n.ending);
        self.path.push(next.clone());
        Some(if reached_ending {
            StoryStep::ReachedEnding { node: next }
        } else {
            StoryStep::Moved
        })
    }

    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.path.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> Story {
        let yaml = r#"
start: start
nodes:
  start:
    text: How does Alex feel?
    options:
      - { id: nervous, text: Nervous, next: nervous }
      - { id: excited, text: Excited, next: join }
  nervous:
    text: Alex feels nervous.
    options:
      - { id: deep-breath, text: Take a deep breath, next: join }
  join:
    text: Alex makes new friends.
    ending: true
    emotion: happy
    options:
      - { id: start, text: Start a new story, next: start }
"#;
        serde_yaml::from_str(yaml).expect("valid story")
    }

    #[test]
    fn walking_to_an_ending_and_restarting() {
        let story = story();
        story.validate().expect("consistent story");
        let mut walk = StoryWalk::new(&story);

        assert_eq!(walk.choose(&story, "nervous"), Some(StoryStep::Moved));
        assert_eq!(
            walk.choose(&story, "deep-breath"),
            Some(StoryStep::ReachedEnding { node: "join".into() })
        );
        assert_eq!(walk.path(), &["start", "nervous", "join"]);
        assert_eq!(walk.current(&story).and_then(|n| n.emotion.as_deref()), Some("happy"));

        assert_eq!(walk.choose(&story, "start"), Some(StoryStep::Restarted));
        assert_eq!(walk.path(), &["start"]);
    }

    #[test]
    fn back_never_pops_the_start() {
        let story = story();
        let mut walk = StoryWalk::new(&story);
        assert!(!walk.back());
        walk.choose(&story, "nervous");
        assert!(walk.back());
        assert_eq!(walk.current_id(), "start");
        assert!(!walk.back());
    }

    #[test]
    fn unknown_option_is_ignored() {
        let story = story();
        let mut walk = StoryWalk::new(&story);
        assert_eq!(walk.choose(&story, "angry"), None);
        assert_eq!(walk.current_id(), "start");
    }

    #[test]
    fn dangling_links_fail_validation() {
        let mut story = story();
        story.nodes.remove("nervous");
        assert!(story.validate().is_err());

        let mut story = self::story();
        story.start = "missing".into();
        assert!(story.validate().is_err());
        assert_eq!(self::story().ending_count(), 1);
    }
}
