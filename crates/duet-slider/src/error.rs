use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("degenerate range: high bound {high} must exceed low bound {low}")]
    DegenerateRange { low: f64, high: f64 },
    #[error("bounds must be finite (low {low}, high {high})")]
    NonFiniteBound { low: f64, high: f64 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("a widget is already attached")]
    AlreadyAttached,
    #[error("the slider has been disposed")]
    Disposed,
}
