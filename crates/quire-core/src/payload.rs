//! The validated post, ready to be sent as multipart form data.

use crate::draft::{ImageFile, Thumbnail};

/// A submitted post.
///
/// Produced by `PostForm::submit` once every required field is present.
#[derive(Clone, Debug, PartialEq)]
pub struct PostPayload {
    pub title: String,
    pub thumbnail: Thumbnail,
    pub featured: bool,
    pub content: String,
    /// At most `MAX_TAGS`, trimmed.
    pub tags: Vec<String>,
    pub meta: String,
    pub slug: String,
}

/// One multipart field value.
#[derive(Clone, Debug, PartialEq)]
pub enum FormField {
    Text(String),
    File(ImageFile),
}

impl FormField {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormField::Text(text) => Some(text),
            FormField::File(_) => None,
        }
    }
}

impl PostPayload {
    /// Tags encoded as a JSON list, the way the server expects them.
    pub fn tags_json(&self) -> String {
        serde_json::to_string(&self.tags).unwrap_or_else(|_| String::from("[]"))
    }

    /// Every field in submission order.
    ///
    /// A missing thumbnail is sent as an empty text field so the server always
    /// sees the full set of keys.
    pub fn fields(&self) -> Vec<(&'static str, FormField)> {
        let thumbnail = match &self.thumbnail {
            Thumbnail::None => FormField::Text(String::new()),
            Thumbnail::Url(url) => FormField::Text(url.clone()),
            Thumbnail::File(file) => FormField::File(file.clone()),
        };
        vec![
            ("title", FormField::Text(self.title.clone())),
            ("thumbnail", thumbnail),
            ("featured", FormField::Text(self.featured.to_string())),
            ("content", FormField::Text(self.content.clone())),
            ("tags", FormField::Text(self.tags_json())),
            ("meta", FormField::Text(self.meta.clone())),
            ("slug", FormField::Text(self.slug.clone())),
        ]
    }
}
