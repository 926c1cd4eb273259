//! JSON request document processing.
//!
//! The document carries base requests (stops and buses), stat requests
//! (queries) and optional settings sections. Depending on the [`Mode`] the
//! document is answered directly, turned into a snapshot, or answered from a
//! previously saved snapshot.

pub mod dto;
mod error;
mod handler;

use std::io::{Read, Write};

use tracing::info;

use crate::catalogue::TransportCatalogue;
use crate::render::RenderSettings;
use crate::router::{RoutingSettings, TransportRouter};
use crate::snapshot::{Snapshot, SnapshotStore};

pub use dto::{RequestDocument, StatResponse};
pub use error::RequestError;
pub use handler::{RequestHandler, load_catalogue};

/// What to do with a request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Load the base requests and answer the stat requests.
    #[default]
    Direct,
    /// Load the base requests and save them as a snapshot.
    MakeBase,
    /// Answer the stat requests from a saved snapshot.
    ProcessRequests,
}

impl Mode {
    /// Parse the optional command-line mode argument.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, RequestError> {
        match arg {
            None => Ok(Mode::Direct),
            Some("make_base") => Ok(Mode::MakeBase),
            Some("process_requests") => Ok(Mode::ProcessRequests),
            Some(other) => Err(RequestError::UnknownMode(other.to_string())),
        }
    }
}

/// Read a document from `input`, act on it, and write any responses to
/// `output` as a JSON array.
pub fn process(mode: Mode, input: impl Read, mut output: impl Write) -> Result<(), RequestError> {
    let document: RequestDocument = serde_json::from_reader(input)?;
    info!(
        ?mode,
        base_requests = document.base_requests.len(),
        stat_requests = document.stat_requests.len(),
        "request document parsed"
    );

    let responses = match mode {
        Mode::Direct => {
            let catalogue = load_catalogue(&document.base_requests)?;
            answer(
                &catalogue,
                document.routing_settings,
                document.render_settings.as_ref(),
                &document,
            )?
        }
        Mode::MakeBase => {
            let store = snapshot_store(&document)?;
            let catalogue = load_catalogue(&document.base_requests)?;
            let snapshot = Snapshot::capture(&catalogue, document.routing_settings)
                .with_render_settings(document.render_settings.clone());
            store.save(&snapshot)?;
            return Ok(());
        }
        Mode::ProcessRequests => {
            let store = snapshot_store(&document)?;
            let snapshot = store.load()?;
            let (catalogue, settings) = snapshot.restore()?;
            answer(
                &catalogue,
                settings,
                snapshot.render_settings.as_ref(),
                &document,
            )?
        }
    };

    serde_json::to_writer_pretty(&mut output, &responses)?;
    writeln!(output)?;
    Ok(())
}

fn snapshot_store(document: &RequestDocument) -> Result<SnapshotStore, RequestError> {
    let settings = document
        .serialization_settings
        .as_ref()
        .ok_or(RequestError::MissingSection("serialization_settings"))?;
    Ok(SnapshotStore::new(&settings.file))
}

fn answer(
    catalogue: &TransportCatalogue,
    routing_settings: Option<RoutingSettings>,
    render_settings: Option<&RenderSettings>,
    document: &RequestDocument,
) -> Result<Vec<StatResponse>, RequestError> {
    let router = routing_settings
        .map(|settings| TransportRouter::new(catalogue, settings))
        .transpose()?;
    let handler =
        RequestHandler::new(catalogue, router.as_ref()).with_render_settings(render_settings);
    Ok(handler.handle_all(&document.stat_requests))
}
