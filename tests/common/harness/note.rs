//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

/// Builder for note documents that start out valid.
///
/// Each field can be overridden with raw YAML text or removed entirely,
/// which makes it easy to produce one specific violation at a time.
#[derive(Debug, Clone)]
pub struct TestNote {
    date: Option<String>,
    status: Option<String>,
    note_type: Option<String>,
    tags: Option<String>,
    body: String,
}

impl TestNote {
    /// Creates a valid note whose body is a level-1 heading with `title`.
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            date: Some("2024-01-15".to_string()),
            status: Some("capture".to_string()),
            note_type: Some("note".to_string()),
            tags: Some("[test]".to_string()),
            body: format!("# {}\n\nBody.\n", title.as_ref()),
        }
    }

    /// Sets the raw YAML value of `date`.
    pub fn date(mut self, value: impl Into<String>) -> Self {
        self.date = Some(value.into());
        self
    }

    /// Sets the raw YAML value of `status`.
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    /// Sets the raw YAML value of `type`.
    pub fn note_type(mut self, value: impl Into<String>) -> Self {
        self.note_type = Some(value.into());
        self
    }

    /// Sets the raw YAML value of `tags`.
    pub fn tags(mut self, value: impl Into<String>) -> Self {
        self.tags = Some(value.into());
        self
    }

    /// Drops a field from the frontmatter.
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "date" => self.date = None,
            "status" => self.status = None,
            "type" => self.note_type = None,
            "tags" => self.tags = None,
            other => panic!("unknown field: {other}"),
        }
        self
    }

    /// Replaces the body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Renders the full document text.
    pub fn render(&self) -> String {
        let fields = [
            ("date", &self.date),
            ("status", &self.status),
            ("type", &self.note_type),
            ("tags", &self.tags),
        ];
        let mut out = String::from("---\n");
        for (key, value) in fields {
            if let Some(value) = value {
                out.push_str(&format!("{key}: {value}\n"));
            }
        }
        out.push_str("---\n");
        out.push_str(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_renders_valid_document() {
        let text = TestNote::new("Title").render();
        assert_eq!(
            text,
            "---\ndate: 2024-01-15\nstatus: capture\ntype: note\ntags: [test]\n---\n# Title\n\nBody.\n"
        );
    }

    #[test]
    fn test_note_without_field() {
        let text = TestNote::new("Title").without("status").render();
        assert!(!text.contains("status:"));
    }
}
