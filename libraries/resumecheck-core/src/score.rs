//! Score presentation: tier thresholds and the animated gauge
//!
//! The gauge is driven by elapsed time rather than a timer callback, so any
//! render loop can feed it. The contract is the same either way: the shown
//! value climbs from 0 to the target in fixed frames over a fixed duration.

use std::time::Duration;

/// Time for the gauge to climb from 0 to its target
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1500);

/// Length of one animation frame
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Score band used for color and label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    /// 80 and above
    Excellent,
    /// 60 to below 80
    Good,
    /// 40 to below 60
    Fair,
    /// Below 40
    NeedsImprovement,
}

impl ScoreTier {
    /// Classify a score; each threshold belongs to the higher tier
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else if score >= 40.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Good => "Good",
            ScoreTier::Fair => "Fair",
            ScoreTier::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Hex color: green, amber, orange, red
    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "#10b981",
            ScoreTier::Good => "#f59e0b",
            ScoreTier::Fair => "#f97316",
            ScoreTier::NeedsImprovement => "#ef4444",
        }
    }

    /// Style class used by the report header
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "score-excellent",
            ScoreTier::Good => "score-good",
            ScoreTier::Fair => "score-fair",
            ScoreTier::NeedsImprovement => "score-poor",
        }
    }
}

/// Gauge animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeState {
    /// Climbing toward the target
    Animating,
    /// Showing the target
    Settled,
}

/// Circular score gauge.
///
/// Changing the score or the animation flag restarts the gauge, the same way
/// a prop change would re-run the effect in a component.
#[derive(Debug, Clone)]
pub struct ScoreGauge {
    target: f64,
    running: f64,
    displayed: f64,
    increment: f64,
    animate: bool,
    /// Elapsed time not yet consumed by whole frames
    pending: Duration,
    state: GaugeState,
}

impl ScoreGauge {
    pub fn new(score: f64, animate: bool) -> Self {
        let mut gauge = Self {
            target: score,
            running: 0.0,
            displayed: 0.0,
            increment: 0.0,
            animate,
            pending: Duration::ZERO,
            state: GaugeState::Settled,
        };
        gauge.restart();
        gauge
    }

    /// Point the gauge at a new score
    pub fn set_score(&mut self, score: f64) {
        self.target = score;
        self.restart();
    }

    pub fn set_animate(&mut self, animate: bool) {
        if self.animate != animate {
            self.animate = animate;
            self.restart();
        }
    }

    fn restart(&mut self) {
        self.pending = Duration::ZERO;

        if self.animate {
            let frames = ANIMATION_DURATION.as_secs_f64() / FRAME_INTERVAL.as_secs_f64();
            self.increment = self.target / frames;
            self.running = 0.0;
            self.displayed = 0.0;
            self.state = GaugeState::Animating;
        } else {
            self.running = self.target;
            self.displayed = self.target;
            self.state = GaugeState::Settled;
        }
    }

    /// Feed elapsed wall time; runs every whole frame it covers.
    ///
    /// Returns `true` while the gauge is still animating.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.state != GaugeState::Animating {
            return false;
        }

        self.pending += elapsed;
        while self.pending >= FRAME_INTERVAL && self.state == GaugeState::Animating {
            self.pending -= FRAME_INTERVAL;
            self.tick();
        }

        self.is_animating()
    }

    /// Run a single frame
    pub fn tick(&mut self) {
        if self.state != GaugeState::Animating {
            return;
        }

        self.running += self.increment;
        if self.running >= self.target {
            self.running = self.target;
            self.displayed = self.target;
            self.state = GaugeState::Settled;
            self.pending = Duration::ZERO;
        } else {
            self.displayed = self.running.floor();
        }
    }

    /// Value currently shown
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn state(&self) -> GaugeState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == GaugeState::Animating
    }

    /// Arc fill, 0.0 to 1.0
    pub fn fraction(&self) -> f64 {
        (self.displayed / 100.0).clamp(0.0, 1.0)
    }

    /// Tier of the shown value, so the color shifts while climbing
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.displayed)
    }
}
