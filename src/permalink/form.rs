use serde::{Deserialize, Serialize};

/// Name of the synthetic field carrying the page location.
pub const ORIGIN_FIELD: &str = "origin";

/// Ordered name/value pairs collected from the console form.
///
/// Duplicate names are allowed, as in any serialized HTML form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermalinkForm {
    fields: Vec<(String, String)>,
}

impl PermalinkForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Request body pairs: the form fields in order, followed by the
    /// synthetic `origin` pair.
    #[must_use]
    pub fn body_pairs(&self, origin: &str) -> Vec<(String, String)> {
        let mut pairs = self.fields.clone();
        pairs.push((ORIGIN_FIELD.to_owned(), origin.to_owned()));
        pairs
    }
}
