use serde::{Deserialize, Deserializer, Serialize};

/// The front-matter part of a snippet file.
///
/// Field order here is the order they are written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tags: Vec<String>,
}

// Hand-edited files often carry `tags:` with nothing after it.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Metadata {
    pub fn new(title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            tags,
        }
    }
}

/// A single snippet.
///
/// `uid` is the file stem inside the store and is never written into the
/// metadata block. Snippets decoded straight from a buffer carry an empty
/// `uid` until a store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub uid: String,
    pub meta: Metadata,
    pub body: String,
}

impl Snippet {
    pub fn new(uid: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            uid: uid.into(),
            meta: Metadata::new(title, tags),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    pub fn tags(&self) -> &[String] {
        &self.meta.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.meta.tags.iter().any(|t| t == tag)
    }
}
