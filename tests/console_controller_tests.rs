use std::cell::RefCell;

use chartboard::BoardError;
use chartboard::api::{ConsoleController, ConsoleEvent, HttpMethod};
use chartboard::error::BoardResult;
use chartboard::permalink::{HttpClient, PermalinkSubmitter};

struct ScriptedClient {
    outcome: Result<String, String>,
    calls: RefCell<usize>,
}

impl ScriptedClient {
    fn ok(token: &str) -> Self {
        Self {
            outcome: Ok(token.to_owned()),
            calls: RefCell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            outcome: Err("boom".to_owned()),
            calls: RefCell::new(0),
        }
    }
}

impl HttpClient for ScriptedClient {
    fn post_form(&self, _url: &str, _fields: &[(String, String)]) -> BoardResult<String> {
        *self.calls.borrow_mut() += 1;
        self.outcome.clone().map_err(BoardError::Permalink)
    }
}

fn controller(client: ScriptedClient) -> ConsoleController<ScriptedClient> {
    ConsoleController::new(client, PermalinkSubmitter::new("https://paste.example/permalink"))
}

#[test]
fn ready_hides_request_body_for_get() {
    let mut console = controller(ScriptedClient::ok("tok"));
    console.handle(ConsoleEvent::Ready).expect("ready");
    assert!(!console.request_body_visible());
}

#[test]
fn ready_shows_request_body_for_an_initial_post_selection() {
    let mut console = controller(ScriptedClient::ok("tok")).with_method(HttpMethod::Post);
    console.handle(ConsoleEvent::Ready).expect("ready");
    assert!(console.request_body_visible());
}

#[test]
fn selecting_body_methods_toggles_the_request_body_section() {
    let mut console = controller(ScriptedClient::ok("tok"));
    console.handle(ConsoleEvent::Ready).expect("ready");

    for (method, visible) in [
        (HttpMethod::Post, true),
        (HttpMethod::Get, false),
        (HttpMethod::Put, true),
        (HttpMethod::Delete, false),
        (HttpMethod::Head, false),
    ] {
        console
            .handle(ConsoleEvent::MethodSelected(method))
            .expect("select");
        assert_eq!(console.request_body_visible(), visible, "method {method:?}");
        assert_eq!(console.method(), method);
    }
}

#[test]
fn permalink_success_fills_focuses_and_selects_the_field() {
    let mut console = controller(ScriptedClient::ok("abc123"));
    console.form_mut().push("a", "1");

    console
        .handle(ConsoleEvent::PermalinkRequested {
            origin: "http://x/y".to_owned(),
        })
        .expect("submit");

    let field = console.permalink_field();
    assert_eq!(field.value(), Some("abc123"));
    assert!(field.is_enabled());
    assert!(field.is_focused());
    assert!(field.is_fully_selected());
}

#[test]
fn permalink_failure_disables_and_clears_the_field() {
    let mut console = controller(ScriptedClient::failing());

    let error = console
        .handle(ConsoleEvent::PermalinkRequested {
            origin: "http://x/y".to_owned(),
        })
        .expect_err("must fail");
    assert!(matches!(error, BoardError::Permalink(_)));

    let field = console.permalink_field();
    assert_eq!(field.value(), None);
    assert!(!field.is_enabled());
}

#[test]
fn http_method_parsing_is_case_insensitive() {
    assert_eq!("POST".parse::<HttpMethod>().expect("parse"), HttpMethod::Post);
    assert_eq!("put".parse::<HttpMethod>().expect("parse"), HttpMethod::Put);
    assert!("BREW".parse::<HttpMethod>().is_err());
}

#[test]
fn only_post_and_put_carry_a_request_body() {
    let with_body: Vec<_> = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Patch,
    ]
    .into_iter()
    .filter(|method| method.has_request_body())
    .collect();
    assert_eq!(with_body, vec![HttpMethod::Post, HttpMethod::Put]);
}
