use futures::{stream::BoxStream, StreamExt};
use tokio::time::{interval_at, Instant, Interval};

use crate::{
    domain::{AppError, SimulationConfig},
    utils::is_youtube_url,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    /// New progress value, 0 to `max`
    Progress(u8),
    Completed,
}

/// Outcome of a single timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced(u8),
    Finished,
}

/// Drives the fake download shown by the form. Nothing is fetched.
#[derive(Clone, Default)]
pub struct DownloadSimulator {
    config: SimulationConfig,
}

impl DownloadSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, url: &str) -> Result<(), AppError> {
        if is_youtube_url(url) {
            Ok(())
        } else {
            Err(AppError::InvalidUrl)
        }
    }

    /// Applies one tick to `progress`.
    ///
    /// A tick that finds progress already at `max` ends the run, so the
    /// completion arrives one interval after the bar is full.
    pub fn advance(&self, progress: u8) -> Tick {
        let SimulationConfig { step, max, .. } = self.config;

        if progress >= max {
            Tick::Finished
        } else {
            Tick::Advanced(progress.saturating_add(step.max(1)).min(max))
        }
    }

    /// Timer-driven sequence of events for one run, starting from zero.
    ///
    /// Ends after yielding `Completed`; dropping it stops the timer.
    pub fn progress_stream(&self) -> BoxStream<'static, SimulationEvent> {
        let simulator = self.clone();
        let period = self.config.interval;

        futures::stream::unfold(
            SimulationState::Running {
                timer: None,
                progress: 0,
            },
            move |state| {
                let simulator = simulator.clone();
                async move {
                    match state {
                        SimulationState::Running { timer, progress } => {
                            // Created on first poll so building the stream needs no runtime
                            let mut timer =
                                timer.unwrap_or_else(|| interval_at(Instant::now() + period, period));
                            timer.tick().await;

                            match simulator.advance(progress) {
                                Tick::Advanced(next) => {
                                    tracing::debug!(progress = next, "simulated progress tick");
                                    Some((
                                        SimulationEvent::Progress(next),
                                        SimulationState::Running {
                                            timer: Some(timer),
                                            progress: next,
                                        },
                                    ))
                                }
                                Tick::Finished => {
                                    Some((SimulationEvent::Completed, SimulationState::Finished))
                                }
                            }
                        }
                        SimulationState::Finished => None,
                    }
                }
            },
        )
        .boxed()
    }
}

enum SimulationState {
    Running {
        timer: Option<Interval>,
        progress: u8,
    },
    Finished,
}
