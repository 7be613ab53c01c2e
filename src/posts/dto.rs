use serde::Deserialize;

use crate::validation::{required_text, FieldError};

pub const NAME_MAX: usize = 30;
pub const TITLE_MAX: usize = 100;
pub const CONTENT_MAX: usize = 1000;

/// Form body of `POST /post`. Missing fields deserialize as empty strings so
/// they are reported by [`PostForm::validate`] instead of the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// A validated post, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub content: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<NewPost, Vec<FieldError>> {
        let mut errors = Vec::new();
        let first_name = required_text(&mut errors, "first_name", &self.first_name, NAME_MAX);
        let last_name = required_text(&mut errors, "last_name", &self.last_name, NAME_MAX);
        let title = required_text(&mut errors, "title", &self.title, TITLE_MAX);
        let content = required_text(&mut errors, "content", &self.content, CONTENT_MAX);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewPost {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
        })
    }
}
