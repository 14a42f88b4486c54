//! Merging untyped external values into the current pair.

use serde_json::Value;

use crate::{HandlePositions, RangeValue};

/// Shape of a value arriving through the form boundary, decided once at the
/// edge. Malformed input is folded into `Absent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawValue {
    Absent,
    /// Moves exactly one edge.
    Scalar(f64),
    /// Replaces both edges.
    Pair { min: f64, max: f64 },
}

/// What a write should do to the current pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Normalized {
    /// The value already matches one of the edges; nothing to write.
    Unchanged,
    Replace(RangeValue),
    /// Fall back to the configured full range.
    Reset,
}

pub fn normalize(raw: &RawValue, current: impl Into<HandlePositions>) -> Normalized {
    let current = current.into();
    match *raw {
        RawValue::Absent => Normalized::Reset,
        RawValue::Scalar(x) if !x.is_finite() => {
            log::debug!("non-finite scalar {x}; resetting");
            Normalized::Reset
        }
        RawValue::Scalar(x) => {
            if x == current.min || x == current.max {
                Normalized::Unchanged
            } else if x <= current.max {
                Normalized::Replace(RangeValue::new(x, current.max))
            } else {
                Normalized::Replace(RangeValue::new(current.min, x))
            }
        }
        RawValue::Pair { min, max } if min.is_finite() && max.is_finite() => {
            Normalized::Replace(RangeValue::new(min, max))
        }
        RawValue::Pair { min, max } => {
            log::debug!("pair with non-finite edge ({min}, {max}); resetting");
            Normalized::Reset
        }
    }
}

impl RawValue {
    /// Classifies a loosely typed JSON value.
    ///
    /// `null`, `false` and `""` are absent. Numbers, numeric strings and
    /// `true` are scalars. Objects carrying both `min` and `max` are pairs
    /// when both coerce to finite numbers. Everything else is absent.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => return RawValue::Absent,
            Value::String(s) if s.is_empty() => return RawValue::Absent,
            _ => {}
        }

        if let Some(x) = coerce_number(value) {
            return if x.is_finite() {
                RawValue::Scalar(x)
            } else {
                RawValue::Absent
            };
        }

        if let Value::Object(map) = value
            && let (Some(min), Some(max)) = (map.get("min"), map.get("max"))
        {
            return match (coerce_number(min), coerce_number(max)) {
                (Some(min), Some(max)) if min.is_finite() && max.is_finite() => {
                    RawValue::Pair { min, max }
                }
                _ => {
                    log::debug!("pair with non-numeric edge: {value}");
                    RawValue::Absent
                }
            };
        }

        log::debug!("unrecognised value shape: {value}");
        RawValue::Absent
    }
}

/// Loose numeric coercion for primitive JSON values.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|x| !x.is_nan())
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Scalar(x)
    }
}

impl From<(f64, f64)> for RawValue {
    fn from((min, max): (f64, f64)) -> Self {
        RawValue::Pair { min, max }
    }
}

impl From<RangeValue> for RawValue {
    fn from(v: RangeValue) -> Self {
        RawValue::Pair {
            min: v.min(),
            max: v.max(),
        }
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(RawValue::Absent, Into::into)
    }
}

impl From<&Value> for RawValue {
    fn from(v: &Value) -> Self {
        RawValue::from_json(v)
    }
}
