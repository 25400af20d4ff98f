use log::warn;

/// The live story request. Exactly one exists at a time, mirrored
/// one-to-one with the builder form; it is rebuilt fresh on every page
/// load and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryRequest {
    pub child_name: String,
    pub age: String,
    pub tone: String,
    pub length: String,
    pub setting: String,
    pub focus: String,
    pub custom_focus: String,
    pub supporting: String,
    pub is_holiday_story: bool,
}

impl Default for StoryRequest {
    fn default() -> Self {
        Self {
            child_name: String::new(),
            age: String::new(),
            tone: "silly and giggly".to_string(),
            length: "medium".to_string(),
            setting: String::new(),
            focus: String::new(),
            custom_focus: String::new(),
            supporting: String::new(),
            is_holiday_story: false,
        }
    }
}

impl StoryRequest {
    /// Copies one field, keyed by the form control's `name` attribute.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "childName" => self.child_name = value,
            "age" => self.age = value,
            "tone" => self.tone = value,
            "length" => self.length = value,
            "setting" => self.setting = value,
            "focus" => self.focus = value,
            "customFocus" => self.custom_focus = value,
            "supporting" => self.supporting = value,
            other => warn!("ignoring unknown story field: {}", other),
        }
    }
}

/// The request used by the "Quick Story" button: name, setting and focus
/// are cleared, and holiday mode follows whatever the decoration flag
/// says at that moment.
pub fn quick_story_request(current: &StoryRequest, holiday_active: bool) -> StoryRequest {
    StoryRequest {
        child_name: String::new(),
        setting: String::new(),
        focus: String::new(),
        is_holiday_story: holiday_active,
        ..current.clone()
    }
}

/// Turns a request into story text. The view only knows this seam, so a
/// real model can be dropped in behind it later.
pub trait StoryGenerator {
    fn generate(&self, request: &StoryRequest) -> String;
}

/// Deterministic template stand-in for a real generator.
pub struct TemplateGenerator;

impl StoryGenerator for TemplateGenerator {
    fn generate(&self, request: &StoryRequest) -> String {
        let name = if request.child_name.is_empty() {
            "Hero"
        } else {
            request.child_name.as_str()
        };

        let mut story = format!(
            "Once upon a time, in a world full of starlight, there was a child named {}. ",
            name
        );

        if request.is_holiday_story {
            story.push_str(
                "It was a magical holiday season, and the air smelled like pine needles and warm cocoa. ",
            );
        }

        if request.setting.is_empty() {
            story.push_str("The adventure began in a place far beyond the stars. ");
        } else {
            story.push_str(&format!("The adventure began in {}. ", request.setting));
        }

        story.push_str(
            "\n\n(This is a preview of the generated story based on your inputs. In a full implementation, this would connect to the AI model.)",
        );
        story
    }
}

pub struct LibraryStory {
    pub title: &'static str,
    pub meta: &'static str,
    pub text: &'static str,
}

/// Pre-written stories shown when the daily free story runs out.
/// Picking one bypasses the generator entirely.
pub const LIBRARY: &[LibraryStory] = &[
    LibraryStory {
        title: "The Bear Who Ate The Moon",
        meta: "Gentle • 5 mins",
        text: "Once upon a time, The Starry Bear woke up from his long nap...",
    },
    LibraryStory {
        title: "Spark the Cloud Dragon",
        meta: "Brave • 8 mins",
        text: "Far away, in the Cloud Kingdom, a little dragon named Spark could not breathe fire...",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(request: &StoryRequest) -> String {
        TemplateGenerator.generate(request)
    }

    #[test]
    fn empty_request_uses_hero_and_default_setting() {
        let story = generate(&StoryRequest::default());
        assert!(story.starts_with(
            "Once upon a time, in a world full of starlight, there was a child named Hero."
        ));
        assert!(story.contains("The adventure began in a place far beyond the stars."));
    }

    #[test]
    fn named_holiday_request_gets_name_cocoa_and_setting() {
        let mut request = StoryRequest::default();
        request.child_name = "Mia".to_string();
        request.setting = "a pirate ship sailing through the northern lights".to_string();
        request.is_holiday_story = true;

        let story = generate(&request);
        assert!(story.starts_with(
            "Once upon a time, in a world full of starlight, there was a child named Mia."
        ));
        assert!(story
            .contains("the air smelled like pine needles and warm cocoa"));
        assert!(story.contains(
            "The adventure began in a pirate ship sailing through the northern lights."
        ));
    }

    #[test]
    fn holiday_sentence_only_appears_when_asked_for() {
        let mut request = StoryRequest::default();
        request.child_name = "Jay".to_string();
        assert!(!generate(&request).contains("pine needles"));

        request.is_holiday_story = true;
        assert!(generate(&request).contains("pine needles"));
    }

    #[test]
    fn output_is_never_empty_and_always_names_the_child() {
        for (name, setting, holiday) in [
            ("", "", false),
            ("Felicitee", "", true),
            ("Mateo", "a crystal city under the ocean", false),
            ("", "a secret magic garden behind your house", true),
        ] {
            let mut request = StoryRequest::default();
            request.child_name = name.to_string();
            request.setting = setting.to_string();
            request.is_holiday_story = holiday;

            let story = generate(&request);
            assert!(!story.is_empty());
            let expected = if name.is_empty() { "Hero" } else { name };
            assert!(story.contains(expected));
        }
    }

    #[test]
    fn set_field_routes_by_dom_name() {
        let mut request = StoryRequest::default();
        request.set_field("childName", "Jay".to_string());
        request.set_field("age", "7".to_string());
        request.set_field("tone", "soft and sleepy".to_string());
        request.set_field("length", "long".to_string());
        request.set_field("setting", "a floating sky island full of friendly dragons".to_string());
        request.set_field("focus", "trying new foods".to_string());
        request.set_field("customFocus", "sharing toys".to_string());
        request.set_field("supporting", "pet dog".to_string());

        assert_eq!(request.child_name, "Jay");
        assert_eq!(request.age, "7");
        assert_eq!(request.tone, "soft and sleepy");
        assert_eq!(request.length, "long");
        assert_eq!(request.setting, "a floating sky island full of friendly dragons");
        assert_eq!(request.focus, "trying new foods");
        assert_eq!(request.custom_focus, "sharing toys");
        assert_eq!(request.supporting, "pet dog");
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let mut request = StoryRequest::default();
        request.set_field("favoriteColor", "blue".to_string());
        assert_eq!(request, StoryRequest::default());
    }

    #[test]
    fn quick_story_clears_fields_and_copies_decor_flag() {
        let mut request = StoryRequest::default();
        request.child_name = "Mateo".to_string();
        request.setting = "a crystal city under the ocean".to_string();
        request.focus = "feeling safe at night".to_string();
        request.supporting = "little sister".to_string();

        let quick = quick_story_request(&request, true);
        assert!(quick.child_name.is_empty());
        assert!(quick.setting.is_empty());
        assert!(quick.focus.is_empty());
        assert!(quick.is_holiday_story);
        // everything else rides along untouched
        assert_eq!(quick.supporting, "little sister");
        assert_eq!(quick.tone, request.tone);

        assert!(!quick_story_request(&request, false).is_holiday_story);
    }

    #[test]
    fn library_keeps_its_fixed_texts() {
        assert_eq!(LIBRARY.len(), 2);
        assert!(LIBRARY[0].text.starts_with("Once upon a time, The Starry Bear"));
        assert!(LIBRARY[1].text.starts_with("Far away, in the Cloud Kingdom"));
    }
}
