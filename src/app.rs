use std::future::Future;
use std::io;
use std::time::Duration;

use anyhow::{anyhow, Context};
use chrono::Local;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::metrics::{MetricsSource, SysinfoSource};
use crate::rates::NetSample;
use crate::tui::{Surface, Tui};
use crate::ui;

/// Why the loop stopped without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// The user pressed `q`.
    Quit,
    /// Ctrl+C in the terminal, SIGINT or SIGTERM.
    Interrupted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Interrupt,
    Redraw,
    Ignore,
}

impl Input {
    fn from_event(event: &Event) -> Self {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(_, _) => Input::Redraw,
            _ => Input::Ignore,
        }
    }

    fn from_key(key: &KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Input::Ignore;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Input::Interrupt
            }
            KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
            _ => Input::Ignore,
        }
    }
}

/// Sample, render, present, check input, wait. Repeat.
///
/// Owns the metrics source and the previous network sample; nothing else
/// survives from one tick to the next.
pub struct RefreshLoop<M> {
    source: M,
    config: Config,
    previous: Option<NetSample>,
    current: Option<Dashboard>,
    warmup: Duration,
}

impl<M: MetricsSource> RefreshLoop<M> {
    pub fn new(source: M, baseline: Option<NetSample>, config: Config) -> Self {
        Self {
            source,
            config,
            previous: baseline,
            current: None,
            warmup: Duration::ZERO,
        }
    }

    /// Hold off the first sample. CPU usage is a difference between two
    /// refreshes, and sysinfo needs them some distance apart.
    pub fn with_warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    /// Take a fresh snapshot and derive this tick's dashboard from it.
    pub fn tick(&mut self) -> &Dashboard {
        let snapshot = self.source.sample();
        let dashboard = Dashboard::advance(snapshot, &mut self.previous);
        if dashboard.rates.is_none() {
            debug!("no network rate this tick");
        }
        self.current.insert(dashboard)
    }

    fn present<S: Surface>(&self, surface: &mut S) -> anyhow::Result<()> {
        let Some(dashboard) = &self.current else {
            return Ok(());
        };
        let config = &self.config;
        surface.draw(|frame| ui::render(dashboard, config, frame))
    }

    /// Drive the loop until quit, interrupt or a display error. The surface is
    /// dropped (and so restored) before this returns, whatever the outcome.
    pub async fn run<S, E, F>(
        mut self,
        mut surface: S,
        mut events: E,
        shutdown: F,
    ) -> anyhow::Result<Exit>
    where
        S: Surface,
        E: Stream<Item = io::Result<Event>> + Unpin,
        F: Future<Output = ()>,
    {
        let mut ticker =
            tokio::time::interval_at(Instant::now() + self.warmup, self.config.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            interval_ms = self.config.refresh_interval.as_millis() as u64,
            "refresh loop running"
        );

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("shutdown signal received");
                    return Ok(Exit::Interrupted);
                }
                event = events.next() => match event {
                    Some(Ok(event)) => match Input::from_event(&event) {
                        Input::Quit => {
                            info!("quit requested");
                            return Ok(Exit::Quit);
                        }
                        Input::Interrupt => {
                            info!("interrupted from keyboard");
                            return Ok(Exit::Interrupted);
                        }
                        Input::Redraw => self.present(&mut surface)?,
                        Input::Ignore => {}
                    },
                    Some(Err(e)) => {
                        return Err(anyhow::Error::new(e).context("reading terminal input"));
                    }
                    None => return Err(anyhow!("terminal input closed")),
                },
                _ = ticker.tick() => {
                    self.tick();
                    self.present(&mut surface)?;
                }
            }
        }
    }
}

/// Resolves on SIGINT or SIGTERM. If a handler can't be installed that
/// signal is simply never observed.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

/// Acquire the terminal and run the monitor against the real system.
pub async fn run(config: Config) -> anyhow::Result<Exit> {
    let source = SysinfoSource::new();
    let baseline = source
        .net_counters()
        .map(|counters| NetSample::new(counters, Local::now()));

    let mut tui = Tui::new()?;
    tui.enter()?;

    let events = EventStream::new();
    let refresh = RefreshLoop::new(source, baseline, config)
        .with_warmup(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    refresh
        .run(tui, events, shutdown_signal())
        .await
        .context("refresh loop failed")
}
