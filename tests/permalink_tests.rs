use std::cell::RefCell;

use chartboard::BoardError;
use chartboard::error::BoardResult;
use chartboard::permalink::{
    HttpClient, ORIGIN_FIELD, PermalinkField, PermalinkForm, PermalinkSubmitter,
};

/// Client double that records every request and replays a canned outcome.
struct ScriptedClient {
    outcome: Result<String, String>,
    requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl ScriptedClient {
    fn ok(token: &str) -> Self {
        Self {
            outcome: Ok(token.to_owned()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_owned()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for ScriptedClient {
    fn post_form(&self, url: &str, fields: &[(String, String)]) -> BoardResult<String> {
        self.requests
            .borrow_mut()
            .push((url.to_owned(), fields.to_vec()));
        self.outcome
            .clone()
            .map_err(BoardError::Permalink)
    }
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_owned(), value.to_owned())
}

#[test]
fn submit_appends_origin_to_the_form_fields() {
    let client = ScriptedClient::ok("tok-1");
    let submitter = PermalinkSubmitter::new("https://paste.example/permalink");
    let form = PermalinkForm::new()
        .with_field("a", "1")
        .with_field("b", "2");

    let token = submitter
        .submit(&client, &form, "http://x/y")
        .expect("submit");
    assert_eq!(token, "tok-1");

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "https://paste.example/permalink");
    assert_eq!(
        requests[0].1,
        vec![pair("a", "1"), pair("b", "2"), pair(ORIGIN_FIELD, "http://x/y")]
    );
}

#[test]
fn duplicate_field_names_are_preserved_in_order() {
    let form = PermalinkForm::new()
        .with_field("tag", "alpha")
        .with_field("tag", "beta");
    let pairs = form.body_pairs("http://x");
    assert_eq!(
        pairs,
        vec![pair("tag", "alpha"), pair("tag", "beta"), pair(ORIGIN_FIELD, "http://x")]
    );
}

#[test]
fn empty_form_still_carries_the_origin_pair() {
    let client = ScriptedClient::ok("tok-2");
    let submitter = PermalinkSubmitter::new("https://paste.example/permalink");

    submitter
        .submit(&client, &PermalinkForm::new(), "http://x/y")
        .expect("submit");
    assert_eq!(client.requests()[0].1, vec![pair(ORIGIN_FIELD, "http://x/y")]);
}

#[test]
fn transport_failures_surface_as_permalink_errors() {
    let client = ScriptedClient::failing("connection refused");
    let submitter = PermalinkSubmitter::new("https://paste.example/permalink");

    let error = submitter
        .submit(&client, &PermalinkForm::new(), "http://x")
        .expect_err("must fail");
    assert!(matches!(error, BoardError::Permalink(_)));
}

#[test]
fn accepted_field_is_focused_and_fully_selected() {
    let mut field = PermalinkField::default();
    assert!(field.is_enabled());
    assert_eq!(field.value(), None);

    field.accept("tok-3".to_owned());
    assert_eq!(field.value(), Some("tok-3"));
    assert!(field.is_enabled());
    assert!(field.is_focused());
    assert!(field.is_fully_selected());
}

#[test]
fn rejected_field_is_cleared_and_disabled() {
    let mut field = PermalinkField::default();
    field.accept("stale".to_owned());
    field.reject();

    assert_eq!(field.value(), None);
    assert!(!field.is_enabled());
    assert!(!field.is_focused());
    assert!(!field.is_fully_selected());
}

#[test]
fn consecutive_submissions_are_independent_requests() {
    let client = ScriptedClient::ok("tok-4");
    let submitter = PermalinkSubmitter::new("https://paste.example/permalink");
    let form = PermalinkForm::new().with_field("a", "1");

    submitter.submit(&client, &form, "http://x").expect("first");
    submitter.submit(&client, &form, "http://x").expect("second");
    assert_eq!(client.requests().len(), 2);
}
