//! Score gauge rendered as a text meter
//!
//! The gauge state lives in [`ScoreGauge`]; this component only draws it and,
//! when animating, drives it from a Tokio interval.

use std::fmt;
use std::io::Write;

use resumecheck_core::score::FRAME_INTERVAL;
use resumecheck_core::ScoreGauge;
use tokio::time::{Instant, MissedTickBehavior};

/// Default diameter, matching the dashboard cards
pub const DEFAULT_SIZE: u32 = 120;

/// Pixels of diameter per meter cell
const PIXELS_PER_CELL: u32 = 6;

#[derive(Debug, Clone)]
pub struct ScoreCircle {
    gauge: ScoreGauge,
    size: u32,
}

impl ScoreCircle {
    pub fn new(score: f64, animate: bool) -> Self {
        Self {
            gauge: ScoreGauge::new(score, animate),
            size: DEFAULT_SIZE,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn gauge(&self) -> &ScoreGauge {
        &self.gauge
    }

    pub fn is_animating(&self) -> bool {
        self.gauge.is_animating()
    }

    fn cells(&self) -> usize {
        (self.size / PIXELS_PER_CELL).max(10) as usize
    }

    /// Run the animation to completion, redrawing the line each frame.
    pub async fn play<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let mut interval = tokio::time::interval(FRAME_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();

        while self.gauge.is_animating() {
            interval.tick().await;
            let now = Instant::now();
            self.gauge.advance(now - last);
            last = now;

            write!(out, "\r{self}")?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }
}

impl fmt::Display for ScoreCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let filled = (self.gauge.fraction() * cells as f64).round() as usize;
        let tier = self.gauge.tier();

        write!(
            f,
            "[{}{}] {:>3}% {} ({})",
            "█".repeat(filled),
            "░".repeat(cells - filled),
            self.gauge.displayed(),
            tier.label(),
            tier.color()
        )
    }
}
