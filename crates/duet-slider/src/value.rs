use std::fmt;

/// An ordered `{min, max}` pair. `min <= max` holds for every instance.
///
/// There is no way to build a `RangeValue` out of order: the constructors
/// swap reversed input and fall back to a default range for missing or
/// non-finite input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PairRepr")
)]
pub struct RangeValue {
    min: f64,
    max: f64,
}

impl RangeValue {
    /// Full range used when nothing better is known.
    pub const DEFAULT: RangeValue = RangeValue {
        min: 0.0,
        max: 100.0,
    };

    /// Orders `a` and `b` ascending. Non-finite input yields [`Self::DEFAULT`].
    pub fn new(a: f64, b: f64) -> Self {
        Self::make(Some(a), Some(b))
    }

    pub fn make(min: Option<f64>, max: Option<f64>) -> Self {
        Self::make_or(min, max, Self::DEFAULT)
    }

    /// Like [`Self::make`], with a caller supplied fallback range.
    pub fn make_or(min: Option<f64>, max: Option<f64>, fallback: RangeValue) -> Self {
        match (min, max) {
            (Some(a), Some(b)) if a.is_finite() && b.is_finite() => {
                if a < b {
                    Self { min: a, max: b }
                } else {
                    Self { min: b, max: a }
                }
            }
            _ => fallback,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for RangeValue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PairRepr {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl From<PairRepr> for RangeValue {
    fn from(p: PairRepr) -> Self {
        RangeValue::new(p.min, p.max)
    }
}

/// Fixed role tag of a physical handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleRole {
    Min,
    Max,
}

impl HandleRole {
    pub const BOTH: [HandleRole; 2] = [HandleRole::Min, HandleRole::Max];
}

impl fmt::Display for HandleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandleRole::Min => "min",
            HandleRole::Max => "max",
        })
    }
}

/// Raw positions of the two physical handles, keyed by role tag.
///
/// Unlike [`RangeValue`] these may be crossed (`min > max`) while a drag has
/// carried one handle past the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandlePositions {
    pub min: f64,
    pub max: f64,
}

impl HandlePositions {
    pub fn get(&self, role: HandleRole) -> f64 {
        match role {
            HandleRole::Min => self.min,
            HandleRole::Max => self.max,
        }
    }

    /// Copy with the `role` handle moved to `x`.
    pub fn with(mut self, role: HandleRole, x: f64) -> Self {
        match role {
            HandleRole::Min => self.min = x,
            HandleRole::Max => self.max = x,
        }
        self
    }

    pub fn is_crossed(&self) -> bool {
        self.min > self.max
    }

    pub fn corrected(&self) -> RangeValue {
        RangeValue::new(self.min, self.max)
    }
}

impl From<RangeValue> for HandlePositions {
    fn from(v: RangeValue) -> Self {
        Self {
            min: v.min,
            max: v.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_reversed_input() {
        let v = RangeValue::new(65.0, 35.0);
        assert_eq!((v.min(), v.max()), (35.0, 65.0));
        assert!(v.min() <= v.max());
    }

    #[test]
    fn equal_bounds_are_kept() {
        let v = RangeValue::new(40.0, 40.0);
        assert_eq!((v.min(), v.max()), (40.0, 40.0));
        assert_eq!(v.span(), 0.0);
    }

    #[test]
    fn missing_or_nan_falls_back_to_default() {
        assert_eq!(RangeValue::make(None, None), RangeValue::DEFAULT);
        assert_eq!(RangeValue::make(Some(f64::NAN), Some(5.0)), RangeValue::DEFAULT);
        assert_eq!(RangeValue::make(Some(5.0), None), RangeValue::DEFAULT);
        assert_eq!(
            RangeValue::make(Some(f64::INFINITY), Some(5.0)),
            RangeValue::DEFAULT
        );
    }

    #[test]
    fn zero_is_a_valid_bound() {
        let v = RangeValue::new(0.0, 50.0);
        assert_eq!((v.min(), v.max()), (0.0, 50.0));
    }

    #[test]
    fn custom_fallback() {
        let fallback = RangeValue::new(-10.0, 10.0);
        assert_eq!(RangeValue::make_or(None, Some(3.0), fallback), fallback);
    }

    #[test]
    fn invariant_holds_across_inputs() {
        let samples = [-1e9, -3.5, 0.0, 0.1, 7.0, 99.9, 1e12, f64::NAN];
        for &a in &samples {
            for &b in &samples {
                let v = RangeValue::new(a, b);
                assert!(v.min() <= v.max(), "{a} {b} -> {v}");
            }
        }
    }

    #[test]
    fn positions_correct_when_crossed() {
        let p = HandlePositions { min: 60.0, max: 50.0 };
        assert!(p.is_crossed());
        assert_eq!(p.corrected(), RangeValue::new(50.0, 60.0));
        assert_eq!(p.with(HandleRole::Max, 70.0).corrected(), RangeValue::new(60.0, 70.0));
    }
}
