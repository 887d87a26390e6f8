//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod pages;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use eggsorter_app::ports::DatasetSource;
use eggsorter_domain::error::{EggSorterError, NotFoundError};

use crate::error::classify;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: DatasetSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(pages::home::<D>))
        .route("/{page}", get(pages::show::<D>))
}

/// Render an askama template into an HTML response.
pub(crate) fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Standalone error page.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Errors surfaced by dashboard handlers as an HTML error page.
pub struct DashboardError(EggSorterError);

impl From<EggSorterError> for DashboardError {
    fn from(err: EggSorterError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for DashboardError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = classify(&self.0);
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        (status, render(&page)).into_response()
    }
}
