use crate::model::Emotion;
use crate::progress::Progress;
use crate::story::Story;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Condición que desbloquea una insignia, evaluada siempre contra el progreso guardado.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeRule {
    VisitedMuseum,
    ViewedAllEmotions,
    AnyStoryEnding,
    StoryEnding { node: String },
    LevelStars { level: u32, stars: u8 },
    AllLevelsCompleted,
    ThreeStarLevels { count: usize },
    /// Todos los niveles completados y todos los finales de la historia vistos.
    Champion,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub rule: BadgeRule,
}

/// Lo que hace falta saber para evaluar las reglas.
#[derive(Clone, Copy)]
pub struct BadgeContext<'a> {
    pub progress: &'a Progress,
    pub emotions: &'a [Emotion],
    pub story: &'a Story,
}

impl BadgeContext<'_> {
    fn all_story_endings_seen(&self) -> bool {
        let mut endings = self.story.ending_ids().peekable();
        endings.peek().is_some() && endings.all(|id| self.progress.story_endings.contains(id))
    }
}

impl BadgeRule {
    pub fn is_met(&self, ctx: &BadgeContext<'_>) -> bool {
        let progress = ctx.progress;
        match self {
            BadgeRule::VisitedMuseum => progress.visited_museum,
            BadgeRule::ViewedAllEmotions => {
                !ctx.emotions.is_empty()
                    && ctx
                        .emotions
                        .iter()
                        .all(|e| progress.viewed_emotions.contains(&e.name))
            }
            BadgeRule::AnyStoryEnding => !progress.story_endings.is_empty(),
            BadgeRule::StoryEnding { node } => progress.story_endings.contains(node),
            BadgeRule::LevelStars { level, stars } => progress
                .level(*level)
                .is_some_and(|l| l.completed && l.stars >= *stars),
            BadgeRule::AllLevelsCompleted => progress.all_levels_completed(),
            BadgeRule::ThreeStarLevels { count } => progress.levels_with_stars(3) >= *count,
            BadgeRule::Champion => progress.all_levels_completed() && ctx.all_story_endings_seen(),
        }
    }
}

pub fn unlocked_ids(badges: &[Badge], ctx: &BadgeContext<'_>) -> BTreeSet<u32> {
    badges
        .iter()
        .filter(|b| b.rule.is_met(ctx))
        .map(|b| b.id)
        .collect()
}

/// Porcentaje redondeado de insignias conseguidas.
pub fn completion_percentage(badges: &[Badge], ctx: &BadgeContext<'_>) -> u32 {
    if badges.is_empty() {
        return 0;
    }
    let unlocked = unlocked_ids(badges, ctx).len();
    (unlocked as f64 * 100.0 / badges.len() as f64).round() as u32
}

/// Insignias que aparecen en `after` y no estaban en `before`, en orden de catálogo.
pub fn newly_unlocked<'b>(
    badges: &'b [Badge],
    before: &BTreeSet<u32>,
    after: &BTreeSet<u32>,
) -> Vec<&'b Badge> {
    badges
        .iter()
        .filter(|b| after.contains(&b.id) && !before.contains(&b.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::StarRating;
    use crate::model::Level;
    use crate::story::{StoryNode, StoryOption};

    fn emotion(id: &str) -> Emotion {
        Emotion {
            id: id.into(),
            name: id.to_uppercase(),
            images: vec![],
            video: None,
            video_duration: None,
            description: String::new(),
        }
    }

    fn story() -> Story {
        let mut story = Story::default();
        let ending = |text: &str| StoryNode {
            text: text.into(),
            image: None,
            options: vec![StoryOption {
                id: "start".into(),
                text: "Again".into(),
                next: "start".into(),
            }],
            ending: true,
            emotion: None,
        };
        story.nodes.insert(
            "start".into(),
            StoryNode {
                text: "Begin".into(),
                image: None,
                options: vec![],
                ending: false,
                emotion: None,
            },
        );
        story.nodes.insert("join".into(), ending("Joined"));
        story.nodes.insert("hide".into(), ending("Hid"));
        story
    }

    fn progress() -> Progress {
        let levels: Vec<Level> = (1..=2)
            .map(|id| Level {
                id,
                name: format!("L{id}"),
                description: String::new(),
            })
            .collect();
        Progress::for_levels(&levels)
    }

    fn badge(id: u32, rule: BadgeRule) -> Badge {
        Badge {
            id,
            name: format!("Badge {id}"),
            description: String::new(),
            icon: String::new(),
            rule,
        }
    }

    #[test]
    fn exploration_rules() {
        let emotions = vec![emotion("joy"), emotion("fear")];
        let story = story();
        let mut progress = progress();
        {
            let ctx = BadgeContext { progress: &progress, emotions: &emotions, story: &story };
            assert!(!BadgeRule::VisitedMuseum.is_met(&ctx));
            assert!(!BadgeRule::ViewedAllEmotions.is_met(&ctx));
        }

        progress.record_museum_visit();
        progress.record_emotion_view("JOY");
        progress.record_emotion_view("FEAR");
        let ctx = BadgeContext { progress: &progress, emotions: &emotions, story: &story };
        assert!(BadgeRule::VisitedMuseum.is_met(&ctx));
        assert!(BadgeRule::ViewedAllEmotions.is_met(&ctx));
    }

    #[test]
    fn viewed_emotions_survive_a_catalog_with_other_ids() {
        let story = story();
        let mut progress = progress();
        progress.record_emotion_view("JOY");
        progress.record_emotion_view("FEAR");

        let remote: Vec<Emotion> = ["67c9a1", "67c9a2"]
            .into_iter()
            .zip(["JOY", "FEAR"])
            .map(|(id, name)| Emotion {
                name: name.into(),
                ..emotion(id)
            })
            .collect();
        let ctx = BadgeContext { progress: &progress, emotions: &remote, story: &story };
        assert!(BadgeRule::ViewedAllEmotions.is_met(&ctx));
    }

    #[test]
    fn level_and_champion_rules() {
        let emotions = vec![emotion("joy")];
        let story = story();
        let mut progress = progress();
        progress.complete_level(1, StarRating::from_score(3, 3));
        progress.record_story_ending("join");

        let ctx = BadgeContext { progress: &progress, emotions: &emotions, story: &story };
        assert!(BadgeRule::LevelStars { level: 1, stars: 3 }.is_met(&ctx));
        assert!(!BadgeRule::LevelStars { level: 2, stars: 1 }.is_met(&ctx));
        assert!(BadgeRule::ThreeStarLevels { count: 1 }.is_met(&ctx));
        assert!(BadgeRule::AnyStoryEnding.is_met(&ctx));
        assert!(!BadgeRule::Champion.is_met(&ctx));

        progress.complete_level(2, StarRating::from_score(1, 4));
        progress.record_story_ending("hide");
        let ctx = BadgeContext { progress: &progress, emotions: &emotions, story: &story };
        assert!(BadgeRule::AllLevelsCompleted.is_met(&ctx));
        assert!(BadgeRule::Champion.is_met(&ctx));
    }

    #[test]
    fn percentage_is_rounded_and_new_badges_are_reported() {
        let emotions = vec![emotion("joy")];
        let story = story();
        let badges = vec![
            badge(1, BadgeRule::VisitedMuseum),
            badge(2, BadgeRule::AnyStoryEnding),
            badge(3, BadgeRule::AllLevelsCompleted),
        ];
        let mut progress = progress();
        progress.record_museum_visit();

        let ctx = BadgeContext { progress: &progress, emotions: &emotions, story: &story };
        let before = unlocked_ids(&badges, &ctx);
        assert_eq!(completion_percentage(&badges, &ctx), 33);

        progress.record_story_ending("join");
        let ctx = BadgeContext { progress: &progress, emotions: &emotions, story: &story };
        let after = unlocked_ids(&badges, &ctx);
        assert_eq!(completion_percentage(&badges, &ctx), 67);

        let fresh: Vec<u32> = newly_unlocked(&badges, &before, &after)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(fresh, vec![2]);
        assert_eq!(completion_percentage(&[], &ctx), 0);
    }

    #[test]
    fn rules_parse_from_tagged_yaml() {
        let yaml = r#"
- { id: 1, name: Explorer, description: Visit, rule: { kind: visited_museum } }
- { id: 2, name: Star, description: Stars, rule: { kind: level_stars, level: 1, stars: 3 } }
- { id: 3, name: Hero, description: Ending, rule: { kind: story_ending, node: join } }
"#;
        let badges: Vec<Badge> = serde_yaml::from_str(yaml).expect("valid badges");
        assert_eq!(badges[1].rule, BadgeRule::LevelStars { level: 1, stars: 3 });
        assert_eq!(badges[2].rule, BadgeRule::StoryEnding { node: "join".into() });
    }
}
