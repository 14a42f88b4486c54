//! # Range slider
//!
//! Two single-value handles governed as one `{min, max}` value.
//!
//! Three sources change the value independently: the host's bounds
//! ([`RangeConfig`]), writes through the form boundary ([`ValueAccessor`] or
//! [`RangeSlider::set_value`]) and the user dragging either handle. They all
//! go through one controller that keeps `min <= max` without rejecting
//! anything:
//!
//! - a handle dragged through the other swaps roles ([`correct`]);
//! - an untyped external value moves one edge, both, or resets
//!   ([`normalize`]);
//! - the fill bar between the handles is derived from the pair
//!   ([`compute_fill`]).
//!
//! ```rust
//! use duet_slider::*;
//!
//! let c = correct(60.0, HandleRole::Min, RangeValue::new(20.0, 50.0));
//! assert_eq!(c.value, RangeValue::new(50.0, 60.0));
//! assert!(c.swapped);
//!
//! let fill = compute_fill(RangeValue::new(35.0, 65.0), &RangeConfig::default());
//! assert_eq!(fill, Fill { length: 30.0, offset: 35.0 });
//! ```
//!
//! [`RangeSliderController`] is the bare state machine: feed it
//! [`ControllerEvent`]s, get [`Notification`]s back. [`RangeSlider`] wires it
//! to a [`SliderHandles`] widget, a [`StyleSink`] and the output emitters.

pub mod component;
pub mod config;
pub mod controller;
pub mod correct;
pub mod error;
pub mod geometry;
pub mod handles;
pub mod normalize;
pub mod value;

pub use component::*;
pub use config::*;
pub use controller::*;
pub use correct::*;
pub use error::*;
pub use geometry::*;
pub use handles::*;
pub use normalize::*;
pub use value::*;
