//! Navigation service — page switching and view population.

use serde::Serialize;

use eggsorter_domain::error::EggSorterError;
use eggsorter_domain::page::Page;
use eggsorter_domain::time::ClockReading;

use crate::ports::DatasetSource;
use crate::view::{CountersView, DeviceView, LogsView, Screen, View};

/// Mutable dashboard state, owned by the caller and passed into each
/// navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    current_page: Page,
}

impl DashboardState {
    /// Fresh state showing the menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.current_page
    }
}

/// Application service that switches pages and builds their view models.
pub struct NavigationService<D> {
    dataset: D,
}

impl<D: DatasetSource> NavigationService<D> {
    /// Create a new service reading from the given dataset.
    pub fn new(dataset: D) -> Self {
        Self { dataset }
    }

    /// Switch `state` to `page` and describe the resulting screen.
    ///
    /// The header is always rebuilt. The dataset is only read for pages
    /// that display data, so the menu never touches it.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the dataset source. The page switch has
    /// already been recorded in `state` at that point.
    pub async fn navigate(
        &self,
        state: &mut DashboardState,
        page: Page,
        clock: ClockReading,
    ) -> Result<Screen, EggSorterError> {
        state.current_page = page;
        let header = page.header();

        let view = if page.needs_data() {
            self.populate(page, &clock).await?
        } else {
            View::Home
        };

        tracing::debug!(%page, "navigated");

        Ok(Screen {
            page,
            header,
            clock,
            view,
        })
    }

    async fn populate(&self, page: Page, clock: &ClockReading) -> Result<View, EggSorterError> {
        let view = match page {
            Page::Home => View::Home,
            Page::Device => {
                let status = self.dataset.device_status().await?;
                View::Device(DeviceView::new(&status, clock))
            }
            Page::Counters => {
                let counters = self.dataset.counters().await?;
                View::Counters(CountersView::new(&counters))
            }
            Page::Logs => {
                let logs = self.dataset.logs().await?;
                View::Logs(LogsView::new(&logs))
            }
        };
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eggsorter_domain::counters::{EggCounters, GradeCounts};
    use eggsorter_domain::device::DeviceStatus;
    use eggsorter_domain::grade::Grade;
    use eggsorter_domain::logs::{LogBook, WeightLogEntry};
    use eggsorter_domain::percent::Percent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingDataset {
        reads: AtomicUsize,
    }

    impl CountingDataset {
        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl DatasetSource for CountingDataset {
        async fn device_status(&self) -> Result<DeviceStatus, EggSorterError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(DeviceStatus {
                temperature_c: 33.3,
                cpu_load: Percent::new(26)?,
                ram_usage: Percent::new(50)?,
                location: "Location name".to_string(),
            })
        }

        async fn counters(&self) -> Result<EggCounters, EggSorterError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(EggCounters {
                total: 23_450,
                daily_total: 1_021,
                average_weight_g: 57.87,
                rejected: 6,
                grades: GradeCounts {
                    a: 2500,
                    b: 3000,
                    c: 4500,
                    d: 1000,
                },
            })
        }

        async fn logs(&self) -> Result<LogBook, EggSorterError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(LogBook {
                weights: vec![
                    WeightLogEntry::new(68.5, Grade::A)?,
                    WeightLogEntry::new(61.41, Grade::B)?,
                    WeightLogEntry::new(54.33, Grade::C)?,
                    WeightLogEntry::new(47.24, Grade::D)?,
                ],
                sensor: WeightLogEntry::new(61.45, Grade::A)?,
                errors: vec![
                    "Egg jam - System stopped".to_string(),
                    "Servo not responding".to_string(),
                ],
            })
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("sensor bus offline")]
    struct Offline;

    struct FailingDataset;

    impl DatasetSource for FailingDataset {
        async fn device_status(&self) -> Result<DeviceStatus, EggSorterError> {
            Err(EggSorterError::DataSource(Box::new(Offline)))
        }

        async fn counters(&self) -> Result<EggCounters, EggSorterError> {
            Err(EggSorterError::DataSource(Box::new(Offline)))
        }

        async fn logs(&self) -> Result<LogBook, EggSorterError> {
            Err(EggSorterError::DataSource(Box::new(Offline)))
        }
    }

    fn clock() -> ClockReading {
        ClockReading {
            date: "October 19, 2026".to_string(),
            weekday: "Monday".to_string(),
            time: "14:03:09".to_string(),
        }
    }

    #[tokio::test]
    async fn should_set_header_for_every_page() {
        let svc = NavigationService::new(CountingDataset::default());
        let mut state = DashboardState::new();

        for page in Page::ALL {
            let screen = svc.navigate(&mut state, page, clock()).await.unwrap();
            assert_eq!(screen.header, page.header());
            assert_eq!(screen.page, page);
            assert!(matches!(
                (page, &screen.view),
                (Page::Home, View::Home)
                    | (Page::Device, View::Device(_))
                    | (Page::Counters, View::Counters(_))
                    | (Page::Logs, View::Logs(_))
            ));
            assert_eq!(state.current_page(), page);
        }
    }

    #[tokio::test]
    async fn should_not_read_dataset_when_navigating_home() {
        let svc = NavigationService::new(CountingDataset::default());
        let mut state = DashboardState::new();

        let screen = svc.navigate(&mut state, Page::Home, clock()).await.unwrap();

        assert_eq!(screen.view, View::Home);
        assert_eq!(svc.dataset.reads(), 0);
    }

    #[tokio::test]
    async fn should_read_dataset_once_per_data_page() {
        let svc = NavigationService::new(CountingDataset::default());
        let mut state = DashboardState::new();

        for page in [Page::Device, Page::Counters, Page::Logs] {
            svc.navigate(&mut state, page, clock()).await.unwrap();
        }

        assert_eq!(svc.dataset.reads(), 3);
    }

    #[tokio::test]
    async fn should_render_four_log_rows_in_order() {
        let svc = NavigationService::new(CountingDataset::default());
        let mut state = DashboardState::new();

        let screen = svc.navigate(&mut state, Page::Logs, clock()).await.unwrap();

        let View::Logs(logs) = screen.view else {
            panic!("expected logs view");
        };
        let classes: Vec<_> = logs.rows.iter().map(|r| r.class.as_str()).collect();
        assert_eq!(
            classes,
            ["row-grade-A", "row-grade-B", "row-grade-C", "row-grade-D"]
        );
        assert_eq!(
            logs.errors,
            ["Egg jam - System stopped", "Servo not responding"]
        );
    }

    #[tokio::test]
    async fn should_produce_identical_screen_when_navigating_twice() {
        let svc = NavigationService::new(CountingDataset::default());
        let mut state = DashboardState::new();

        for page in Page::ALL {
            let first = svc.navigate(&mut state, page, clock()).await.unwrap();
            let second = svc.navigate(&mut state, page, clock()).await.unwrap();
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn should_record_page_even_when_dataset_fails() {
        let svc = NavigationService::new(FailingDataset);
        let mut state = DashboardState::new();

        let result = svc.navigate(&mut state, Page::Device, clock()).await;

        assert!(matches!(result, Err(EggSorterError::DataSource(_))));
        assert_eq!(state.current_page(), Page::Device);
    }

    #[tokio::test]
    async fn should_render_home_even_when_dataset_fails() {
        let svc = NavigationService::new(FailingDataset);
        let mut state = DashboardState::new();

        let screen = svc.navigate(&mut state, Page::Home, clock()).await.unwrap();

        assert_eq!(screen.header.title, "AUTO EGG SORTER");
    }
}
