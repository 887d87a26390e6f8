//! Clock endpoints — latest reading and a Server-Sent Events stream.

use std::convert::Infallible;

use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;

use eggsorter_app::ports::DatasetSource;
use eggsorter_domain::time::ClockReading;

use crate::state::AppState;

/// `GET /api/clock` — the most recent clock reading.
pub async fn current<D>(State(state): State<AppState<D>>) -> Json<ClockReading>
where
    D: DatasetSource + Send + Sync + 'static,
{
    let reading = state.clock.borrow().clone();
    Json(reading)
}

/// `GET /api/clock/stream` — SSE stream of clock readings.
///
/// Sends the current reading immediately, then one `clock` event per
/// change. The stream ends when the clock task stops.
pub async fn stream<D>(
    State(state): State<AppState<D>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>
where
    D: DatasetSource + Send + Sync + 'static,
{
    let readings = WatchStream::new(state.clock.clone()).filter_map(|reading| {
        match serde_json::to_string(&reading) {
            Ok(json) => Some(Ok(Event::default().event("clock").data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize clock reading for SSE stream");
                None
            }
        }
    });

    Sse::new(readings).keep_alive(KeepAlive::default())
}
