use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BlankPrompt;

/// A generated story as the backend returns it. Immutable on the client; the
/// first line of `content` is the title, the remaining lines are the body
/// paragraphs. `audio_url` rides along in the payload but narration is always
/// synthesized on demand.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoryView {
    pub id: String,
    pub prompt: String,
    pub content: String,
    pub duration: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoryView {
    pub fn title(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }

    pub fn body_paragraphs(&self) -> Vec<String> {
        self.content.lines().skip(1).map(str::to_string).collect()
    }

    pub fn created_label(&self) -> String {
        self.created_at
            .map(|created| created.format("%B %e, %Y").to_string())
            .unwrap_or_default()
    }
}

/// Payload for a single generation call. Age and duration come from bounded
/// sliders (0-12 and 3-15), so only the prompt needs validating here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewStoryRequest {
    pub prompt: String,
    pub age: i32,
    pub duration: i32,
}

impl NewStoryRequest {
    /// Trims the prompt and rejects it when nothing is left, before any
    /// network call is made.
    pub fn validated(mut self) -> Result<Self, BlankPrompt> {
        let trimmed = self.prompt.trim();
        if trimmed.is_empty() {
            return Err(BlankPrompt);
        }
        self.prompt = trimmed.to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(content: &str) -> StoryView {
        StoryView {
            id: "42".to_string(),
            prompt: "a brave dragon".to_string(),
            content: content.to_string(),
            duration: 5,
            image_url: None,
            audio_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_title_is_first_content_line() {
        let story = story("The Brave Dragon\nOnce upon a time...");
        assert_eq!(story.title(), "The Brave Dragon");
        assert_eq!(story.body_paragraphs(), vec!["Once upon a time..."]);
    }

    #[test]
    fn test_empty_content_has_empty_title() {
        let story = story("");
        assert_eq!(story.title(), "");
        assert!(story.body_paragraphs().is_empty());
    }

    #[test]
    fn test_blank_prompts_are_rejected() {
        for prompt in ["", " ", "\t", "  \n  "] {
            let request = NewStoryRequest {
                prompt: prompt.to_string(),
                age: 5,
                duration: 5,
            };
            assert!(request.validated().is_err());
        }
    }

    #[test]
    fn test_validated_prompt_is_trimmed() {
        let request = NewStoryRequest {
            prompt: "  a brave dragon  ".to_string(),
            age: 5,
            duration: 5,
        };
        let request = request.validated().unwrap();
        assert_eq!(request.prompt, "a brave dragon");
    }

    #[test]
    fn test_story_deserializes_without_optional_fields() {
        let story: StoryView = serde_json::from_str(
            r#"{"id":"1","prompt":"p","content":"Title\nBody","duration":5}"#,
        )
        .unwrap();
        assert!(story.image_url.is_none());
        assert!(story.created_at.is_none());
        assert_eq!(story.title(), "Title");
    }
}
