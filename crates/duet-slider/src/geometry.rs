//! Fill bar geometry.
//!
//! The fill bar spans the two handles. Its length and offset are expressed as
//! percentages of the configured range and are independent of orientation;
//! orientation only picks the style properties they land on. Values outside
//! the bounds produce percentages outside `0..=100` (no clamping).

use std::fmt;

use crate::{RangeConfig, RangeValue};

const MAX_TICKS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    /// Percent of the track covered by the bar.
    pub length: f64,
    /// Percent from the start edge (the end edge when inverted).
    pub offset: f64,
}

/// Precondition: `config.span() > 0`. A degenerate config yields non-finite
/// percentages.
pub fn compute_fill(value: RangeValue, config: &RangeConfig) -> Fill {
    let range = config.span();
    let length = value.span() * 100.0 / range;
    let offset = if config.invert {
        (config.high_bound - value.max()) * 100.0 / range
    } else {
        (value.min() - config.low_bound) * 100.0 / range
    };
    Fill { length, offset }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Width,
    Height,
    MarginLeft,
    Bottom,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::MarginLeft => "margin-left",
            StyleProperty::Bottom => "bottom",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// The two style properties a fill is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillAxes {
    pub length: StyleProperty,
    pub offset: StyleProperty,
}

impl FillAxes {
    pub fn for_orientation(vertical: bool) -> Self {
        if vertical {
            Self {
                length: StyleProperty::Height,
                offset: StyleProperty::Bottom,
            }
        } else {
            Self {
                length: StyleProperty::Width,
                offset: StyleProperty::MarginLeft,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub axes: FillAxes,
    pub fill: Fill,
}

impl FillStyle {
    pub fn new(value: RangeValue, config: &RangeConfig) -> Self {
        Self {
            axes: FillAxes::for_orientation(config.vertical),
            fill: compute_fill(value, config),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "{}: {}%; {}: {}%",
            self.axes.length, self.fill.length, self.axes.offset, self.fill.offset
        )
    }
}

/// Render target for the fill bar.
pub trait StyleSink {
    /// Sets `property` to `percent`%, or clears it when `None`.
    fn set_style(&mut self, property: StyleProperty, percent: Option<f64>);
}

/// Percent positions of tick marks, one every `tick_interval` steps starting
/// at the low bound.
pub fn tick_positions(config: &RangeConfig, tick_interval: u32) -> Vec<f64> {
    let range = config.span();
    let spacing = f64::from(tick_interval) * config.step;
    if !(range > 0.0) || !(spacing > 0.0) {
        return Vec::new();
    }
    let count = (range / spacing).floor();
    if count >= MAX_TICKS as f64 {
        log::debug!("{count} ticks requested; not drawing ticks");
        return Vec::new();
    }
    (0..=count as usize)
        .map(|i| i as f64 * spacing * 100.0 / range)
        .collect()
}
