//! Frame clocks.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

/// Paces the loop: suspends until the next frame is due and reports the
/// milliseconds elapsed since the previous tick. The first tick reports 0.
#[async_trait]
pub trait Clock {
    async fn tick(&mut self, target_fps: u32) -> u32;
}

/// Wall-clock pacing on the tokio timer.
#[derive(Debug, Default)]
pub struct TokioClock {
    last_tick: Option<Instant>,
}

impl TokioClock {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Length of one frame at `target_fps` (a zero rate is treated as 1 fps)
pub fn frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}

#[async_trait]
impl Clock for TokioClock {
    async fn tick(&mut self, target_fps: u32) -> u32 {
        let Some(last) = self.last_tick else {
            tokio::task::yield_now().await;
            self.last_tick = Some(Instant::now());
            return 0;
        };

        tokio::time::sleep_until(last + frame_duration(target_fps)).await;
        let now = Instant::now();
        self.last_tick = Some(now);
        u32::try_from(now.duration_since(last).as_millis()).unwrap_or(u32::MAX)
    }
}

/// Deterministic clock: every tick after the first reports `frame_ms`
/// without sleeping. Used for headless runs and tests.
#[derive(Debug, Clone)]
pub struct SteppedClock {
    frame_ms: u32,
    ticks: u64,
}

impl SteppedClock {
    pub fn new(frame_ms: u32) -> Self {
        Self { frame_ms, ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[async_trait]
impl Clock for SteppedClock {
    async fn tick(&mut self, _target_fps: u32) -> u32 {
        tokio::task::yield_now().await;
        self.ticks += 1;
        if self.ticks == 1 {
            0
        } else {
            self.frame_ms
        }
    }
}
