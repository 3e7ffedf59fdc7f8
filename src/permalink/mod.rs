pub mod client;
pub mod form;
pub mod submitter;

pub use client::HttpClient;
#[cfg(feature = "http-client")]
pub use client::ReqwestClient;
pub use form::{ORIGIN_FIELD, PermalinkForm};
pub use submitter::{PermalinkField, PermalinkSubmitter};
