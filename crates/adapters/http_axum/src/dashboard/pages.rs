//! Dashboard pages — one template per page kind.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Response;

use eggsorter_app::ports::DatasetSource;
use eggsorter_app::view::{CountersView, DeviceView, LogsView, Screen, View};
use eggsorter_domain::page::{Header, Page};
use eggsorter_domain::time::ClockReading;

use super::{DashboardError, render};
use crate::state::AppState;

/// Fields shared by every page through `base.html`.
pub struct Layout {
    refresh_seconds: u32,
    header: Header,
    clock: ClockReading,
    menu: Vec<MenuLink>,
}

/// One entry of the navigation menu.
pub struct MenuLink {
    href: &'static str,
    label: &'static str,
    active: bool,
}

fn menu(current: Page) -> Vec<MenuLink> {
    Page::ALL
        .into_iter()
        .map(|page| MenuLink {
            href: match page {
                Page::Home => "/",
                Page::Device => "/device",
                Page::Counters => "/counters",
                Page::Logs => "/logs",
            },
            label: match page {
                Page::Home => "Menu",
                Page::Device => "PICO",
                Page::Counters => "EGGS",
                Page::Logs => "LOGS",
            },
            active: page == current,
        })
        .collect()
}

/// Menu page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    layout: Layout,
}

/// Controller board page template.
#[derive(Template)]
#[template(path = "device.html")]
pub struct DeviceTemplate {
    layout: Layout,
    view: DeviceView,
}

/// Egg counters page template.
#[derive(Template)]
#[template(path = "counters.html")]
pub struct CountersTemplate {
    layout: Layout,
    view: CountersView,
}

/// Logs page template.
#[derive(Template)]
#[template(path = "logs.html")]
pub struct LogsTemplate {
    layout: Layout,
    view: LogsView,
}

/// Paint a navigation result with the template of its page kind.
#[must_use]
pub fn render_screen(screen: Screen, refresh_seconds: u32) -> Response {
    let Screen {
        page,
        header,
        clock,
        view,
    } = screen;
    let layout = Layout {
        refresh_seconds,
        header,
        clock,
        menu: menu(page),
    };

    match view {
        View::Home => render(&HomeTemplate { layout }),
        View::Device(view) => render(&DeviceTemplate { layout, view }),
        View::Counters(view) => render(&CountersTemplate { layout, view }),
        View::Logs(view) => render(&LogsTemplate { layout, view }),
    }
}

/// `GET /` — the menu.
pub async fn home<D>(State(state): State<AppState<D>>) -> Result<Response, DashboardError>
where
    D: DatasetSource + Send + Sync + 'static,
{
    let screen = state.navigate(Page::Home).await?;
    Ok(render_screen(screen, state.refresh_seconds))
}

/// `GET /{page}` — navigate to a named page.
pub async fn show<D>(
    State(state): State<AppState<D>>,
    Path(page): Path<String>,
) -> Result<Response, DashboardError>
where
    D: DatasetSource + Send + Sync + 'static,
{
    let page: Page = page.parse()?;
    let screen = state.navigate(page).await?;
    Ok(render_screen(screen, state.refresh_seconds))
}
