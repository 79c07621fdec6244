//! Event loop between the host launcher and a keyword query listener.
//!
//! Reads host events line by line, dispatches keyword queries to the
//! listener one at a time, and writes each result list back as one line.
use crate::error::ServerError;
use crate::protocol::{HostEvent, HostResponse};

use svgl_core::KeywordQueryListener;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// The main extension handler.
pub struct ExtensionHandler<L> {
    listener: L,
}

impl<L: KeywordQueryListener> ExtensionHandler<L> {
    /// Create a new handler around the given listener.
    pub fn new(listener: L) -> Self {
        Self { listener }
    }

    /// Serve events from `reader` until EOF.
    ///
    /// Returns the number of result lists written.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<usize, ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut responses = 0;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let event = match serde_json::from_str::<HostEvent>(line) {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("skipping malformed event: {}", e);
                    continue;
                }
            };

            let query = match event {
                HostEvent::KeywordQuery(query) => query,
                HostEvent::Unknown => {
                    tracing::debug!("ignoring unsubscribed event");
                    continue;
                }
            };

            let list = self.listener.on_event(&query).await;
            tracing::debug!("rendering {} items", list.len());

            let mut out = serde_json::to_vec(&HostResponse::RenderResultList(list))?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
            responses += 1;
        }

        tracing::info!("host closed the event stream after {} queries", responses);

        Ok(responses)
    }
}
