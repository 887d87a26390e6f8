//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use eggsorter_app::ports::DatasetSource;
use eggsorter_app::services::navigation_service::{DashboardState, NavigationService};
use eggsorter_app::view::Screen;
use eggsorter_domain::error::EggSorterError;
use eggsorter_domain::page::Page;
use eggsorter_domain::time::ClockReading;

/// Application state shared across all axum handlers.
///
/// Generic over the dataset source to avoid dynamic dispatch. `Clone` is
/// implemented manually so `D` itself does not need to be `Clone`.
pub struct AppState<D> {
    /// Page switching and view population.
    pub navigation: Arc<NavigationService<D>>,
    /// Which page the dashboard currently shows.
    pub dashboard: Arc<Mutex<DashboardState>>,
    /// Latest reading published by the clock task.
    pub clock: watch::Receiver<ClockReading>,
    /// Auto-reload interval of rendered pages.
    pub refresh_seconds: u32,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            navigation: Arc::clone(&self.navigation),
            dashboard: Arc::clone(&self.dashboard),
            clock: self.clock.clone(),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<D> AppState<D>
where
    D: DatasetSource + Send + Sync + 'static,
{
    /// Create a new application state showing the menu.
    pub fn new(
        navigation: NavigationService<D>,
        clock: watch::Receiver<ClockReading>,
        refresh_seconds: u32,
    ) -> Self {
        Self {
            navigation: Arc::new(navigation),
            dashboard: Arc::new(Mutex::new(DashboardState::new())),
            clock,
            refresh_seconds,
        }
    }

    /// Navigate the shared dashboard to `page`.
    ///
    /// Navigations are serialized by the dashboard lock.
    ///
    /// # Errors
    ///
    /// Propagates the dataset error raised while populating the page.
    pub async fn navigate(&self, page: Page) -> Result<Screen, EggSorterError> {
        let clock = self.clock.borrow().clone();
        let mut dashboard = self.dashboard.lock().await;
        self.navigation.navigate(&mut dashboard, page, clock).await
    }

    /// Page the dashboard currently shows.
    pub async fn current_page(&self) -> Page {
        self.dashboard.lock().await.current_page()
    }
}
