//! Navigation endpoints returning view models as JSON.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use eggsorter_app::ports::DatasetSource;
use eggsorter_app::view::Screen;
use eggsorter_domain::page::Page;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /api/state`.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub current_page: Page,
}

/// `GET /api/pages/{page}` — navigate and return the resulting screen.
pub async fn navigate<D>(
    State(state): State<AppState<D>>,
    Path(page): Path<String>,
) -> Result<Json<Screen>, ApiError>
where
    D: DatasetSource + Send + Sync + 'static,
{
    let page: Page = page.parse()?;
    let screen = state.navigate(page).await?;
    Ok(Json(screen))
}

/// `GET /api/state` — which page the dashboard currently shows.
pub async fn current_state<D>(State(state): State<AppState<D>>) -> Json<StateResponse>
where
    D: DatasetSource + Send + Sync + 'static,
{
    Json(StateResponse {
        current_page: state.current_page().await,
    })
}
