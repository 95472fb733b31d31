//! JSON request documents.
//!
//! A document carries the network definition (`base_requests`), the
//! `routing_settings`, and the questions to answer (`stat_requests`). This
//! module loads the first two into a catalogue and router and answers the
//! third.

mod error;
mod handler;
mod types;

pub use error::RequestError;
pub use handler::{RequestHandler, load_catalogue, process_document};
pub use types::{BaseRequest, Document, StatRequest, StatResponse};
