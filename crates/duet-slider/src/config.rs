use bitflags::bitflags;

use crate::{ConfigError, RangeValue};

/// Coordinate space the range lives in. Owned by the host; the controller
/// only reads it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RangeConfig {
    pub low_bound: f64,
    pub high_bound: f64,
    pub step: f64,
    pub vertical: bool,
    pub invert: bool,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            low_bound: 0.0,
            high_bound: 100.0,
            step: 5.0,
            vertical: false,
            invert: false,
        }
    }
}

impl RangeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn low_bound(mut self, low: f64) -> Self {
        self.low_bound = low;
        self
    }

    pub fn high_bound(mut self, high: f64) -> Self {
        self.high_bound = high;
        self
    }

    pub fn bounds(self, low: f64, high: f64) -> Self {
        self.low_bound(low).high_bound(high)
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// `high_bound - low_bound`; not positive for a degenerate config.
    pub fn span(&self) -> f64 {
        self.high_bound - self.low_bound
    }

    /// Range a reset falls back to. A non-finite bound is replaced by the
    /// matching edge of [`RangeValue::DEFAULT`].
    pub fn full_range(&self) -> RangeValue {
        let low = if self.low_bound.is_finite() {
            self.low_bound
        } else {
            RangeValue::DEFAULT.min()
        };
        let high = if self.high_bound.is_finite() {
            self.high_bound
        } else {
            RangeValue::DEFAULT.max()
        };
        RangeValue::new(low, high)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.low_bound.is_finite() || !self.high_bound.is_finite() {
            return Err(ConfigError::NonFiniteBound {
                low: self.low_bound,
                high: self.high_bound,
            });
        }
        if self.high_bound <= self.low_bound {
            return Err(ConfigError::DegenerateRange {
                low: self.low_bound,
                high: self.high_bound,
            });
        }
        if !(self.step > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        Ok(())
    }

    /// Fields that differ between `self` and `next`.
    pub fn diff(&self, next: &RangeConfig) -> ConfigChanges {
        let mut changes = ConfigChanges::empty();
        changes.set(ConfigChanges::LOW_BOUND, self.low_bound != next.low_bound);
        changes.set(ConfigChanges::HIGH_BOUND, self.high_bound != next.high_bound);
        changes.set(ConfigChanges::STEP, self.step != next.step);
        changes.set(ConfigChanges::VERTICAL, self.vertical != next.vertical);
        changes.set(ConfigChanges::INVERT, self.invert != next.invert);
        changes
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ConfigChanges: u8 {
        const LOW_BOUND  = 1 << 0;
        const HIGH_BOUND = 1 << 1;
        const STEP       = 1 << 2;
        const VERTICAL   = 1 << 3;
        const INVERT     = 1 << 4;

        const BOUNDS = Self::LOW_BOUND.bits() | Self::HIGH_BOUND.bits();
        /// Changes that move or re-map the fill bar.
        const GEOMETRY = Self::BOUNDS.bits() | Self::VERTICAL.bits() | Self::INVERT.bits();
    }
}

/// Presentation options passed through to the handle widget.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SliderOptions {
    pub disabled: bool,
    pub tab_index: Option<i32>,
    pub thumb_label: bool,
    pub color: String,
    /// Steps between tick marks; `0` hides them.
    pub tick_interval: u32,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            tab_index: None,
            thumb_label: false,
            color: "primary".to_string(),
            tick_interval: 10,
        }
    }
}
