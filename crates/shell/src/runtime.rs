//! # App Runtime
//!
//! Mounting the shell starts two background tasks that both report into one
//! unbounded event queue:
//! 1. The one-shot catalog fetch, which posts `FetchCompleted`
//! 2. The carousel timer, which posts `Tick` every rotation period
//!
//! UI input goes into the same queue through [`AppRuntime::sender`], and
//! [`AppRuntime::step`] applies events one at a time in arrival order.
//! Unmounting (or dropping the runtime) closes the queue, aborts an
//! unfinished fetch and cancels the timer, so nothing touches state after
//! teardown.

use std::future::Future;

use carousel::{CarouselConfig, CarouselTimer};
use catalog::{FeedError, LoadPhase, MovieRecord};
use feed_client::FeedClient;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::CinemaApp;
use crate::config::ShellConfig;
use crate::error::Result;
use crate::events::{AppEvent, EventKind};

/// The catalog fetch task, aborted if still running when dropped
struct FetchTask(JoinHandle<()>);

impl Drop for FetchTask {
    fn drop(&mut self) {
        if !self.0.is_finished() {
            debug!("Aborting unfinished catalog fetch");
            self.0.abort();
        }
    }
}

/// A mounted shell: the app state plus the tasks that feed it
pub struct AppRuntime {
    app: CinemaApp,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    _timer: CarouselTimer,
    _fetch: FetchTask,
}

impl AppRuntime {
    /// Mount against the configured feed.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(config: ShellConfig) -> Result<Self> {
        let client = FeedClient::new(config.feed.clone());
        info!("Mounting shell with feed {}", client.source());
        Self::mount_with(config.carousel, async move { client.fetch_catalog().await })
    }

    /// Mount with any catalog source
    pub fn mount_with<F>(carousel: CarouselConfig, fetch: F) -> Result<Self>
    where
        F: Future<Output = std::result::Result<Vec<MovieRecord>, FeedError>> + Send + 'static,
    {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let timer = CarouselTimer::spawn(carousel.rotation_interval, events_tx.clone())?;

        let mut app = CinemaApp::new(carousel);
        app.begin_load();

        let fetch_tx = events_tx.clone();
        let fetch = tokio::spawn(async move {
            let outcome = fetch.await;
            if let Err(err) = &outcome {
                warn!("Catalog fetch failed: {}", err);
            }
            if fetch_tx.send(AppEvent::FetchCompleted(outcome)).is_err() {
                debug!("Shell unmounted before the catalog arrived");
            }
        });

        Ok(Self {
            app,
            events_tx,
            events_rx,
            _timer: timer,
            _fetch: FetchTask(fetch),
        })
    }

    pub fn app(&self) -> &CinemaApp {
        &self.app
    }

    /// A handle for posting UI events into the queue
    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.events_tx.clone()
    }

    /// Queue a UI event behind whatever is already waiting
    pub fn dispatch(&self, event: AppEvent) {
        // The receiver lives as long as self, so this cannot fail
        let _ = self.events_tx.send(event);
    }

    /// Wait for the next event and apply it
    pub async fn step(&mut self) -> Option<EventKind> {
        let event = self.events_rx.recv().await?;
        let kind = event.kind();
        debug!("Handling {:?}", kind);
        self.app.handle(event);
        Some(kind)
    }

    /// Apply everything already queued without waiting
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.app.handle(event);
            handled += 1;
        }
        handled
    }

    /// Keep stepping until the catalog load settles.
    ///
    /// Ticks that arrive first are applied as usual.
    pub async fn wait_until_loaded(&mut self) -> LoadPhase {
        while self.app.store().phase() == LoadPhase::Loading {
            if self.step().await.is_none() {
                break;
            }
        }
        self.app.store().phase()
    }

    /// Tear down and hand back the final state
    pub fn unmount(self) -> CinemaApp {
        info!("Unmounting shell");
        let AppRuntime { app, .. } = self;
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use carousel::CarouselError;
    use std::time::Duration;
    use tokio::time::Instant;

    fn rated_feed(n: usize) -> Vec<MovieRecord> {
        (0..n)
            .map(|i| {
                let mut record = MovieRecord::new(format!("Movie {}", i));
                record.total_rating = Some(90.0 - i as f64);
                record
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_loads_and_ranks() {
        let mut runtime =
            AppRuntime::mount_with(CarouselConfig::default(), async { Ok(rated_feed(7)) })
                .unwrap();
        assert_eq!(runtime.app().store().phase(), LoadPhase::Loading);

        assert_eq!(runtime.wait_until_loaded().await, LoadPhase::Ready);
        assert_eq!(runtime.app().store().len(), 7);
        assert_eq!(runtime.app().carousel().ranked().len(), 5);
        assert_eq!(runtime.app().carousel().current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_every_period() {
        let mut runtime =
            AppRuntime::mount_with(CarouselConfig::default(), async { Ok(rated_feed(5)) })
                .unwrap();
        runtime.wait_until_loaded().await;

        let start = Instant::now();
        assert_eq!(runtime.step().await, Some(EventKind::Tick));
        assert_eq!(start.elapsed(), Duration::from_millis(4000));
        assert_eq!(runtime.app().carousel().current_index(), 1);

        assert_eq!(runtime.step().await, Some(EventKind::Tick));
        assert_eq!(runtime.app().carousel().current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_and_ticks_share_queue() {
        let mut runtime =
            AppRuntime::mount_with(CarouselConfig::default(), async { Ok(rated_feed(5)) })
                .unwrap();
        runtime.wait_until_loaded().await;

        runtime.dispatch(AppEvent::SelectSlide(3));
        assert_eq!(runtime.step().await, Some(EventKind::SelectSlide));
        assert_eq!(runtime.app().carousel().current_index(), 3);

        // The selection did not reset the timer
        assert_eq!(runtime.step().await, Some(EventKind::Tick));
        assert_eq!(runtime.app().carousel().current_index(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetch_sees_ticks_first() {
        let mut runtime = AppRuntime::mount_with(CarouselConfig::default(), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(rated_feed(3))
        })
        .unwrap();

        assert_eq!(runtime.step().await, Some(EventKind::Tick));
        assert_eq!(runtime.app().carousel().current_index(), 0);

        assert_eq!(runtime.wait_until_loaded().await, LoadPhase::Ready);
        assert_eq!(runtime.app().carousel().ranked().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_leaves_empty_catalog() {
        let mut runtime = AppRuntime::mount_with(CarouselConfig::default(), async {
            Err(FeedError::HttpStatus { status: 500 })
        })
        .unwrap();

        assert_eq!(runtime.wait_until_loaded().await, LoadPhase::Error);
        assert!(runtime.app().cards().is_empty());

        assert_eq!(runtime.step().await, Some(EventKind::Tick));
        assert_eq!(runtime.app().carousel().current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_closes_queue() {
        let runtime = AppRuntime::mount_with(CarouselConfig::default(), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(rated_feed(3))
        })
        .unwrap();
        let ui = runtime.sender();

        let app = runtime.unmount();
        assert_eq!(app.store().phase(), LoadPhase::Loading);
        assert!(ui.send(AppEvent::Tick).is_err());
    }

    #[tokio::test]
    async fn test_zero_interval_fails_mount() {
        let config = CarouselConfig::default().with_rotation_interval(Duration::ZERO);
        let result = AppRuntime::mount_with(config, async { Ok(Vec::new()) });

        assert!(matches!(
            result,
            Err(ShellError::Carousel(CarouselError::InvalidInterval(_)))
        ));
    }

    #[tokio::test]
    async fn test_mount_from_http_feed() {
        use axum::Router;
        use axum::routing::get;

        let feed = r#"{"Movies": [
            {"title": "Heat", "total_rating": 89, "screenings": {"Yes Planet": ["21:00"]}},
            {"title": "Up", "total_rating": "77"}
        ]}"#;
        let router = Router::new().route("/movies.json", get(move || async move { feed }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        let config = ShellConfig::default()
            .with_feed_url(format!("http://{}/movies.json", addr))
            .with_rotation_interval(Duration::from_secs(60));
        let mut runtime = AppRuntime::mount(config).unwrap();

        assert_eq!(runtime.wait_until_loaded().await, LoadPhase::Ready);
        let titles: Vec<_> = runtime
            .app()
            .carousel()
            .ranked()
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles, vec!["Heat", "Up"]);

        runtime.dispatch(AppEvent::QueryChanged("yes planet".to_string()));
        runtime.drain();
        assert_eq!(runtime.app().cards().len(), 1);
    }
}
