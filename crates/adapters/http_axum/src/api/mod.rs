//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod clock;
#[allow(clippy::missing_errors_doc)]
pub mod pages;

use axum::Router;
use axum::routing::get;

use eggsorter_app::ports::DatasetSource;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: DatasetSource + Send + Sync + 'static,
{
    Router::new()
        // Navigation
        .route("/pages/{page}", get(pages::navigate::<D>))
        .route("/state", get(pages::current_state::<D>))
        // Clock
        .route("/clock", get(clock::current::<D>))
        .route("/clock/stream", get(clock::stream::<D>))
}
