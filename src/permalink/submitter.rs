use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BoardResult;
use crate::permalink::{HttpClient, PermalinkForm};

/// Posts a serialized form plus the page origin to a configured endpoint and
/// returns the opaque permalink token from the response body.
///
/// Submissions are independent: no in-flight guard, no retry, no
/// cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermalinkSubmitter {
    endpoint: String,
}

impl PermalinkSubmitter {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn submit(
        &self,
        client: &impl HttpClient,
        form: &PermalinkForm,
        origin: &str,
    ) -> BoardResult<String> {
        let pairs = form.body_pairs(origin);
        debug!(
            endpoint = %self.endpoint,
            fields = pairs.len(),
            "submitting permalink form"
        );
        client.post_form(&self.endpoint, &pairs)
    }
}

/// Model of the permalink result control.
///
/// On success the field holds the token, is focused, and has its contents
/// fully selected for copying. On failure it is cleared and disabled, a
/// defined state instead of a stale value behind an inert control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermalinkField {
    value: Option<String>,
    enabled: bool,
    focused: bool,
    fully_selected: bool,
}

impl PermalinkField {
    pub fn accept(&mut self, token: String) {
        self.value = Some(token);
        self.enabled = true;
        self.focused = true;
        self.fully_selected = true;
    }

    pub fn reject(&mut self) {
        self.value = None;
        self.enabled = false;
        self.focused = false;
        self.fully_selected = false;
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn is_fully_selected(&self) -> bool {
        self.fully_selected
    }
}

impl Default for PermalinkField {
    fn default() -> Self {
        Self {
            value: None,
            enabled: true,
            focused: false,
            fully_selected: false,
        }
    }
}
