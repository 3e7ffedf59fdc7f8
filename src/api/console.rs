use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::permalink::{HttpClient, PermalinkField, PermalinkForm, PermalinkSubmitter};

/// HTTP methods selectable in the console page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl HttpMethod {
    /// Methods whose requests carry a body; the request-body section is shown
    /// only for these.
    #[must_use]
    pub const fn has_request_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch => "PATCH",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "PATCH" => Ok(Self::Patch),
            _ => Err(BoardError::UnsupportedMethod(input.to_owned())),
        }
    }
}

/// Page events routed through the console controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// Page became interactive; visibility is computed from the current
    /// method selection.
    Ready,
    /// The method select changed.
    MethodSelected(HttpMethod),
    /// The permalink button was pressed; `origin` is the current page
    /// location.
    PermalinkRequested { origin: String },
}

/// Event-driven controller for the console page.
///
/// All handlers are wired at construction and dispatched through
/// [`ConsoleController::handle`]; there are no implicit page-load side
/// effects. Chart rendering is a separate concern driven by
/// `ChartBoard::render_document`.
pub struct ConsoleController<C: HttpClient> {
    client: C,
    submitter: PermalinkSubmitter,
    form: PermalinkForm,
    method: HttpMethod,
    request_body_visible: bool,
    field: PermalinkField,
}

impl<C: HttpClient> ConsoleController<C> {
    #[must_use]
    pub fn new(client: C, submitter: PermalinkSubmitter) -> Self {
        Self {
            client,
            submitter,
            form: PermalinkForm::new(),
            method: HttpMethod::Get,
            request_body_visible: false,
            field: PermalinkField::default(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn form(&self) -> &PermalinkForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PermalinkForm {
        &mut self.form
    }

    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub fn request_body_visible(&self) -> bool {
        self.request_body_visible
    }

    #[must_use]
    pub fn permalink_field(&self) -> &PermalinkField {
        &self.field
    }

    /// Single dispatch point for console page events.
    ///
    /// A failed permalink submission disables and clears the result field
    /// before the error is returned, so the control never sits in a stale
    /// state.
    pub fn handle(&mut self, event: ConsoleEvent) -> BoardResult<()> {
        match event {
            ConsoleEvent::Ready => {
                self.request_body_visible = self.method.has_request_body();
                Ok(())
            }
            ConsoleEvent::MethodSelected(method) => {
                self.method = method;
                self.request_body_visible = method.has_request_body();
                Ok(())
            }
            ConsoleEvent::PermalinkRequested { origin } => {
                match self.submitter.submit(&self.client, &self.form, &origin) {
                    Ok(token) => {
                        self.field.accept(token);
                        Ok(())
                    }
                    Err(error) => {
                        self.field.reject();
                        Err(error)
                    }
                }
            }
        }
    }
}
