//! The draft post record and the files attached to it.

use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;
use mime_sniffer::MimeTypeSniffer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// In-progress post, as edited and as persisted.
///
/// The JSON form is what ends up in localStorage. A selected thumbnail file is
/// written as an empty string; only a thumbnail URL round-trips.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct DraftPost {
    pub title: String,
    pub thumbnail: Thumbnail,
    pub featured: bool,
    pub content: String,
    /// Comma-separated, as typed.
    pub tags: String,
    pub meta: String,
}

/// Cover image of a post.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Thumbnail {
    #[default]
    None,
    /// A freshly selected file, not yet uploaded.
    File(ImageFile),
    /// A previously stored image (edit mode).
    Url(String),
}

impl Thumbnail {
    /// URL to show for this thumbnail, if it has one without reading a file.
    pub fn url(&self) -> Option<&str> {
        match self {
            Thumbnail::Url(url) => Some(url),
            _ => None,
        }
    }
}

impl Serialize for Thumbnail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.url().unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Thumbnail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older drafts stored the file handle as `{}`; anything that isn't a
        // non-empty string means "no thumbnail".
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(url) if !url.is_empty() => Thumbnail::Url(url),
            _ => Thumbnail::None,
        })
    }
}

/// A file picked by the author.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub name: SmolStr,
    /// Declared MIME type, or sniffed from the bytes when the browser gave none.
    pub mime_type: SmolStr,
    pub data: Bytes,
}

impl ImageFile {
    /// Build from raw bytes, trusting `declared` when it is present.
    pub fn new(name: impl Into<SmolStr>, data: impl Into<Bytes>, declared: Option<&str>) -> Self {
        let data: Bytes = data.into();
        let raw: &[u8] = &data;
        let mime_type = declared
            .filter(|m| !m.is_empty())
            .map(SmolStr::new)
            .or_else(|| raw.sniff_mime_type().map(SmolStr::new))
            .unwrap_or_else(|| SmolStr::new_static("application/octet-stream"));
        Self {
            name: name.into(),
            mime_type,
            data,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Inline `data:` URL for previewing the file without uploading it.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }
}

/// Text fields of the form that share the plain change path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Content,
    Tags,
    Meta,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_draft_json_uses_flat_field_names() {
        let draft = DraftPost {
            title: "Hello".into(),
            featured: true,
            tags: "a, b".into(),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["thumbnail"], "");
        assert_eq!(json["featured"], true);
        assert_eq!(json["tags"], "a, b");
    }

    #[test]
    fn test_file_thumbnail_is_not_persisted() {
        let draft = DraftPost {
            thumbnail: Thumbnail::File(ImageFile::new("cover.png", PNG_MAGIC, None)),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        let restored: DraftPost = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.thumbnail, Thumbnail::None);
    }

    #[test]
    fn test_url_thumbnail_round_trips() {
        let draft = DraftPost {
            thumbnail: Thumbnail::Url("https://img.example/cover.jpg".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        let restored: DraftPost = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, draft);
    }

    #[test]
    fn test_legacy_object_thumbnail_and_missing_fields() {
        let restored: DraftPost =
            serde_json::from_str(r#"{"title":"Old","thumbnail":{}}"#).unwrap();
        assert_eq!(restored.title, "Old");
        assert_eq!(restored.thumbnail, Thumbnail::None);
        assert!(!restored.featured);
        assert!(restored.meta.is_empty());
    }

    #[test]
    fn test_image_detection() {
        let sniffed = ImageFile::new("cover", PNG_MAGIC, None);
        assert_eq!(sniffed.mime_type, "image/png");
        assert!(sniffed.is_image());

        let declared = ImageFile::new("notes.txt", &b"hello"[..], Some("text/plain"));
        assert!(!declared.is_image());
    }

    #[test]
    fn test_declared_type_beats_sniffing() {
        // SVG has no magic bytes; only the declared type identifies it.
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#;
        let file = ImageFile::new("a.svg", &svg[..], Some("image/svg+xml"));
        assert_eq!(file.mime_type, "image/svg+xml");
        assert!(file.is_image());

        let undeclared = ImageFile::new("a.svg", &svg[..], None);
        assert!(!undeclared.is_image());

        let blank = ImageFile::new("cover", PNG_MAGIC, Some(""));
        assert_eq!(blank.mime_type, "image/png");
    }

    #[test]
    fn test_data_url() {
        let file = ImageFile::new("a.gif", &b"GIF89a"[..], Some("image/gif"));
        assert_eq!(file.data_url(), "data:image/gif;base64,R0lGODlh");
    }
}
