//! The range slider state machine.
//!
//! `RangeSliderController` holds the authoritative form state and turns every
//! incoming event into a list of [`Notification`]s. It performs no I/O of its
//! own: delivering notifications to emitters, callbacks, handles and the style
//! sink is left to [`crate::RangeSlider`], which makes the controller usable
//! (and testable) without a widget.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::{
    ConfigChanges, FillAxes, FillStyle, HandlePositions, HandleRole, LifecycleError, Normalized,
    RangeConfig, RangeValue, RawValue, SliderOptions, StyleProperty, correct, normalize,
    tick_positions,
};

pub type DisplayWith = Rc<dyn Fn(f64) -> String>;

pub type Notifications = SmallVec<[Notification; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Transient: construction seeds the form state and leaves it before
    /// returning, so it is never observed from outside.
    Uninitialized,
    Initializing,
    Ready,
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleEventKind {
    /// Continuous drag.
    Live,
    /// Drag released or discrete change.
    Commit,
    /// Bare "value became X".
    Value,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ControllerEvent {
    Handle {
        role: HandleRole,
        kind: HandleEventKind,
        position: f64,
    },
    ExternalWrite(RawValue),
    Config(RangeConfig),
}

/// Origin of a form state write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    UserLive,
    UserCommit,
    UserValue,
    /// Written through the form boundary; never echoed back to it.
    ExternalWrite,
    /// Pulled in after a bound edit.
    Reconcile,
}

impl Provenance {
    fn notifies_form(self, changed: bool) -> bool {
        match self {
            Provenance::UserCommit => true,
            Provenance::Reconcile => changed,
            Provenance::UserLive | Provenance::UserValue | Provenance::ExternalWrite => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    /// Live drag output.
    Input(RangeValue),
    /// Commit output.
    Change(RangeValue),
    /// The corrected pair changed, for any reason.
    ValueChange(RangeValue),
    /// For the form boundary's on-change callback.
    FormChange(RangeValue),
    /// For the form boundary's on-touched callback.
    Touched,
    /// Move the physical handles here.
    Positions(HandlePositions),
    Style {
        property: StyleProperty,
        percent: Option<f64>,
    },
}

/// Internal form state: raw handle positions plus the orientation reported
/// by the last correction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormState {
    pub positions: HandlePositions,
    pub swapped: bool,
}

impl FormState {
    pub fn corrected(&self) -> RangeValue {
        self.positions.corrected()
    }
}

pub struct RangeSliderController {
    lifecycle: Lifecycle,
    config: RangeConfig,
    options: SliderOptions,
    display_with: Option<DisplayWith>,
    form: FormState,
    value: Option<RangeValue>,
    touched: bool,
}

impl RangeSliderController {
    pub fn new(config: RangeConfig) -> Self {
        Self::with_options(config, SliderOptions::default())
    }

    pub fn with_options(config: RangeConfig, options: SliderOptions) -> Self {
        let mut controller = Self {
            lifecycle: Lifecycle::Uninitialized,
            form: FormState {
                positions: RangeValue::DEFAULT.into(),
                swapped: false,
            },
            config,
            options,
            display_with: None,
            value: None,
            touched: false,
        };
        controller.seed();
        controller
    }

    fn seed(&mut self) {
        if let Err(e) = self.config.validate() {
            log::warn!("range slider config: {e}");
        }
        self.form.positions = self.config.full_range().into();
        self.lifecycle = Lifecycle::Initializing;
        log::trace!(
            "range slider initializing with {}",
            self.form.corrected()
        );
    }

    /// The handle widget now exists. Returns the initial geometry and handle
    /// positions.
    pub fn attach(&mut self) -> Result<Notifications, LifecycleError> {
        match self.lifecycle {
            Lifecycle::Ready => return Err(LifecycleError::AlreadyAttached),
            Lifecycle::Disposed => return Err(LifecycleError::Disposed),
            Lifecycle::Uninitialized | Lifecycle::Initializing => {}
        }
        self.lifecycle = Lifecycle::Ready;
        log::trace!("range slider ready");

        let mut out = Notifications::new();
        out.push(Notification::Positions(self.form.positions));
        self.push_fill(&mut out);
        Ok(out)
    }

    pub fn dispose(&mut self) {
        if self.lifecycle != Lifecycle::Disposed {
            log::trace!("range slider disposed");
            self.lifecycle = Lifecycle::Disposed;
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SliderOptions) {
        self.options = options;
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    /// Current value, seeded from the form state on first read.
    pub fn value(&mut self) -> RangeValue {
        let corrected = self.form.corrected();
        *self.value.get_or_insert(corrected)
    }

    /// Current value without seeding; `None` until first read or write.
    pub fn peek_value(&self) -> Option<RangeValue> {
        self.value
    }

    pub fn fill_style(&self) -> FillStyle {
        FillStyle::new(self.form.corrected(), &self.config)
    }

    pub fn tick_positions(&self) -> Vec<f64> {
        tick_positions(&self.config, self.options.tick_interval)
    }

    pub fn set_display_with(&mut self, f: Option<DisplayWith>) {
        self.display_with = f;
    }

    /// Thumb label text for `role`, when thumb labels are on.
    pub fn display_value(&self, role: HandleRole) -> Option<String> {
        if !self.options.thumb_label {
            return None;
        }
        let x = self.form.positions.get(role);
        Some(match &self.display_with {
            Some(f) => f(x),
            None => x.to_string(),
        })
    }

    pub fn dispatch(&mut self, event: ControllerEvent) -> Notifications {
        if self.lifecycle == Lifecycle::Disposed {
            log::warn!("range slider event after dispose ignored: {event:?}");
            return Notifications::new();
        }
        log::trace!("dispatch {event:?}");
        match event {
            ControllerEvent::Handle {
                role,
                kind,
                position,
            } => self.on_handle(role, kind, position),
            ControllerEvent::ExternalWrite(raw) => self.on_external_write(&raw),
            ControllerEvent::Config(config) => self.on_config(config),
        }
    }

    fn on_handle(&mut self, role: HandleRole, kind: HandleEventKind, x: f64) -> Notifications {
        let mut out = Notifications::new();
        if self.lifecycle != Lifecycle::Ready {
            log::debug!("{role} handle event before attach ignored");
            return out;
        }
        if self.options.disabled {
            log::debug!("{role} handle event while disabled ignored");
            return out;
        }
        if !x.is_finite() {
            log::debug!("{role} handle reported non-finite position {x}");
            return out;
        }

        if !self.touched {
            self.touched = true;
            out.push(Notification::Touched);
        }

        let correction = correct(x, role, self.form.positions);
        let next = FormState {
            positions: self.form.positions.with(role, x),
            swapped: correction.swapped,
        };
        let provenance = match kind {
            HandleEventKind::Live => Provenance::UserLive,
            HandleEventKind::Commit => Provenance::UserCommit,
            HandleEventKind::Value => Provenance::UserValue,
        };
        self.write(next, provenance, &mut out);
        self.push_fill(&mut out);

        match kind {
            HandleEventKind::Live => out.push(Notification::Input(correction.value)),
            HandleEventKind::Commit => out.push(Notification::Change(correction.value)),
            HandleEventKind::Value => {}
        }
        out
    }

    fn on_external_write(&mut self, raw: &RawValue) -> Notifications {
        let mut out = Notifications::new();
        let target = match normalize(raw, self.form.positions) {
            Normalized::Unchanged => None,
            Normalized::Replace(v) => Some(v),
            Normalized::Reset => Some(self.config.full_range()),
        };
        if let Some(v) = target {
            let next = FormState {
                positions: v.into(),
                swapped: self.form.swapped,
            };
            self.write(next, Provenance::ExternalWrite, &mut out);
        }
        self.push_fill(&mut out);
        out
    }

    fn on_config(&mut self, config: RangeConfig) -> Notifications {
        let mut out = Notifications::new();
        let changes = self.config.diff(&config);
        let previous = std::mem::replace(&mut self.config, config);
        if changes.is_empty() {
            return out;
        }
        if let Err(e) = self.config.validate() {
            log::warn!("range slider config: {e}");
        }
        if self.lifecycle != Lifecycle::Ready {
            log::trace!("config change {changes:?} before attach; not reconciling");
            return out;
        }

        if let Some(positions) =
            reconcile_bounds(self.form.positions, self.form.swapped, &self.config, changes)
        {
            let next = FormState {
                positions,
                swapped: self.form.swapped,
            };
            self.write(next, Provenance::Reconcile, &mut out);
        }

        if changes.contains(ConfigChanges::VERTICAL) {
            let stale = FillAxes::for_orientation(previous.vertical);
            for property in [stale.length, stale.offset] {
                out.push(Notification::Style {
                    property,
                    percent: None,
                });
            }
        }
        if changes.intersects(ConfigChanges::GEOMETRY) {
            self.push_fill(&mut out);
        }
        out
    }

    /// The only place the form state is written.
    fn write(&mut self, next: FormState, provenance: Provenance, out: &mut Notifications) {
        let before = self.form.corrected();
        self.form = next;
        let after = next.corrected();
        let changed = before != after;
        self.value = Some(after);

        if self.lifecycle == Lifecycle::Ready {
            out.push(Notification::Positions(next.positions));
        }
        if changed {
            out.push(Notification::ValueChange(after));
        }
        if provenance.notifies_form(changed) {
            out.push(Notification::FormChange(after));
        }
    }

    fn push_fill(&self, out: &mut Notifications) {
        if self.lifecycle != Lifecycle::Ready {
            return;
        }
        let style = self.fill_style();
        out.push(Notification::Style {
            property: style.axes.length,
            percent: Some(style.fill.length),
        });
        out.push(Notification::Style {
            property: style.axes.offset,
            percent: Some(style.fill.offset),
        });
    }
}

impl fmt::Debug for RangeSliderController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSliderController")
            .field("lifecycle", &self.lifecycle)
            .field("config", &self.config)
            .field("options", &self.options)
            .field("form", &self.form)
            .field("value", &self.value)
            .field("touched", &self.touched)
            .field("display_with", &self.display_with.is_some())
            .finish()
    }
}

/// Pulls an edge in after a bound edit invalidated it.
///
/// Which handle moves is decided by `swapped`, the orientation of the last
/// correction, not by the handles' current geometry. A stale orientation can
/// leave the pair partly outside the new bounds.
pub fn reconcile_bounds(
    positions: HandlePositions,
    swapped: bool,
    config: &RangeConfig,
    changes: ConfigChanges,
) -> Option<HandlePositions> {
    let mut next = positions;
    if changes.contains(ConfigChanges::HIGH_BOUND) && config.high_bound < next.corrected().max()
    {
        let target = if swapped { HandleRole::Min } else { HandleRole::Max };
        next = next.with(target, config.high_bound);
    }
    if changes.contains(ConfigChanges::LOW_BOUND) && config.low_bound > next.corrected().min()
    {
        let target = if swapped { HandleRole::Max } else { HandleRole::Min };
        next = next.with(target, config.low_bound);
    }
    if next == positions {
        return None;
    }
    log::debug!("bounds changed; handles pulled from {positions:?} to {next:?}");
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(config: RangeConfig) -> RangeSliderController {
        let mut c = RangeSliderController::new(config);
        c.attach().unwrap();
        c
    }

    fn handle(role: HandleRole, kind: HandleEventKind, position: f64) -> ControllerEvent {
        ControllerEvent::Handle {
            role,
            kind,
            position,
        }
    }

    fn value_changes(out: &Notifications) -> Vec<RangeValue> {
        out.iter()
            .filter_map(|n| match n {
                Notification::ValueChange(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    fn form_changes(out: &Notifications) -> usize {
        out.iter()
            .filter(|n| matches!(n, Notification::FormChange(_)))
            .count()
    }

    #[test]
    fn construction_seeds_from_bounds() {
        let mut c = RangeSliderController::new(RangeConfig::new().bounds(10.0, 20.0));
        assert_eq!(c.lifecycle(), Lifecycle::Initializing);
        assert_eq!(c.peek_value(), None);
        assert_eq!(c.value(), RangeValue::new(10.0, 20.0));
        assert_eq!(c.peek_value(), Some(RangeValue::new(10.0, 20.0)));
    }

    #[test]
    fn attach_emits_initial_geometry_once() {
        let mut c = RangeSliderController::new(RangeConfig::default());
        let out = c.attach().unwrap();
        assert_eq!(c.lifecycle(), Lifecycle::Ready);
        assert!(out.contains(&Notification::Style {
            property: StyleProperty::Width,
            percent: Some(100.0)
        }));
        assert!(out.contains(&Notification::Style {
            property: StyleProperty::MarginLeft,
            percent: Some(0.0)
        }));
        assert_eq!(c.attach().unwrap_err(), LifecycleError::AlreadyAttached);
    }

    #[test]
    fn handle_events_before_attach_are_ignored() {
        let mut c = RangeSliderController::new(RangeConfig::default());
        let out = c.dispatch(handle(HandleRole::Min, HandleEventKind::Live, 30.0));
        assert!(out.is_empty());
        assert_eq!(c.form().corrected(), RangeValue::DEFAULT);
    }

    #[test]
    fn live_drag_emits_input_and_geometry() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(handle(HandleRole::Min, HandleEventKind::Live, 35.0));

        assert_eq!(out.first(), Some(&Notification::Touched));
        assert!(out.contains(&Notification::Input(RangeValue::new(35.0, 100.0))));
        assert_eq!(value_changes(&out), vec![RangeValue::new(35.0, 100.0)]);
        assert_eq!(form_changes(&out), 0);
        assert!(out.contains(&Notification::Style {
            property: StyleProperty::Width,
            percent: Some(65.0)
        }));
    }

    #[test]
    fn touched_fires_once() {
        let mut c = ready(RangeConfig::default());
        let first = c.dispatch(handle(HandleRole::Min, HandleEventKind::Live, 10.0));
        let second = c.dispatch(handle(HandleRole::Min, HandleEventKind::Live, 20.0));
        assert!(first.contains(&Notification::Touched));
        assert!(!second.contains(&Notification::Touched));
    }

    #[test]
    fn commit_notifies_form_even_when_live_already_wrote() {
        let mut c = ready(RangeConfig::default());
        c.dispatch(handle(HandleRole::Max, HandleEventKind::Live, 70.0));
        let out = c.dispatch(handle(HandleRole::Max, HandleEventKind::Commit, 70.0));

        assert!(value_changes(&out).is_empty());
        assert_eq!(form_changes(&out), 1);
        assert!(out.contains(&Notification::Change(RangeValue::new(0.0, 70.0))));
    }

    #[test]
    fn crossing_drag_records_swap() {
        let mut c = ready(RangeConfig::default());
        c.dispatch(ControllerEvent::ExternalWrite(RawValue::Pair {
            min: 20.0,
            max: 50.0,
        }));
        let out = c.dispatch(handle(HandleRole::Min, HandleEventKind::Live, 60.0));

        assert!(out.contains(&Notification::Input(RangeValue::new(50.0, 60.0))));
        assert!(c.form().swapped);
        assert!(c.form().positions.is_crossed());

        let out = c.dispatch(handle(HandleRole::Min, HandleEventKind::Live, 65.0));
        assert!(out.contains(&Notification::Input(RangeValue::new(50.0, 65.0))));
    }

    #[test]
    fn external_write_never_reaches_the_form_callback() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::ExternalWrite(RawValue::Scalar(40.0)));
        assert_eq!(value_changes(&out), vec![RangeValue::new(40.0, 100.0)]);
        assert_eq!(form_changes(&out), 0);
        assert!(!out.contains(&Notification::Touched));
    }

    #[test]
    fn external_write_before_attach_updates_state_only() {
        let mut c = RangeSliderController::new(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::ExternalWrite(RawValue::Pair {
            min: 35.0,
            max: 65.0,
        }));
        assert_eq!(out.as_slice(), &[Notification::ValueChange(RangeValue::new(35.0, 65.0))]);
        assert_eq!(c.value(), RangeValue::new(35.0, 65.0));
    }

    #[test]
    fn reset_emits_one_value_change_only_when_different() {
        let mut c = ready(RangeConfig::default());
        c.dispatch(ControllerEvent::ExternalWrite(RawValue::Pair {
            min: 35.0,
            max: 65.0,
        }));

        let out = c.dispatch(ControllerEvent::ExternalWrite(RawValue::Absent));
        assert_eq!(value_changes(&out), vec![RangeValue::DEFAULT]);
        assert_eq!(c.value(), RangeValue::DEFAULT);

        let out = c.dispatch(ControllerEvent::ExternalWrite(RawValue::Absent));
        assert!(value_changes(&out).is_empty());
    }

    #[test]
    fn unchanged_scalar_still_refreshes_geometry() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::ExternalWrite(RawValue::Scalar(100.0)));
        assert!(value_changes(&out).is_empty());
        assert!(!out.iter().any(|n| matches!(n, Notification::Positions(_))));
        assert!(out.iter().any(|n| matches!(n, Notification::Style { .. })));
    }

    #[test]
    fn disabled_ignores_user_events() {
        let mut c = ready(RangeConfig::default());
        c.set_disabled(true);
        let out = c.dispatch(handle(HandleRole::Min, HandleEventKind::Commit, 30.0));
        assert!(out.is_empty());

        c.set_disabled(false);
        let out = c.dispatch(handle(HandleRole::Min, HandleEventKind::Commit, 30.0));
        assert_eq!(form_changes(&out), 1);
    }

    #[test]
    fn non_finite_positions_are_dropped() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(handle(HandleRole::Max, HandleEventKind::Live, f64::NAN));
        assert!(out.is_empty());
        assert_eq!(c.form().corrected(), RangeValue::DEFAULT);
    }

    #[test]
    fn shrinking_high_bound_pulls_max_in() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::Config(RangeConfig::default().high_bound(60.0)));

        assert_eq!(c.form().corrected(), RangeValue::new(0.0, 60.0));
        assert_eq!(value_changes(&out), vec![RangeValue::new(0.0, 60.0)]);
        assert_eq!(form_changes(&out), 1);
        assert!(out.contains(&Notification::Style {
            property: StyleProperty::Width,
            percent: Some(100.0)
        }));
    }

    #[test]
    fn raising_low_bound_pulls_min_in() {
        let mut c = ready(RangeConfig::default());
        c.dispatch(ControllerEvent::Config(RangeConfig::default().low_bound(25.0)));
        assert_eq!(c.form().corrected(), RangeValue::new(25.0, 100.0));
    }

    #[test]
    fn widening_bounds_keeps_pair() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::Config(RangeConfig::default().bounds(-50.0, 150.0)));
        assert_eq!(c.form().corrected(), RangeValue::DEFAULT);
        assert!(value_changes(&out).is_empty());
        assert_eq!(form_changes(&out), 0);
        assert!(out.contains(&Notification::Style {
            property: StyleProperty::Width,
            percent: Some(50.0)
        }));
    }

    #[test]
    fn config_before_attach_is_stored_but_not_reconciled() {
        let mut c = RangeSliderController::new(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::Config(RangeConfig::default().high_bound(50.0)));
        assert!(out.is_empty());
        assert_eq!(c.config().high_bound, 50.0);
        assert_eq!(c.form().corrected(), RangeValue::DEFAULT);
    }

    #[test]
    fn bound_edit_after_crossing_pulls_the_moved_handle() {
        let mut c = ready(RangeConfig::default());
        c.dispatch(ControllerEvent::ExternalWrite(RawValue::Pair {
            min: 20.0,
            max: 50.0,
        }));
        c.dispatch(handle(HandleRole::Min, HandleEventKind::Commit, 70.0));
        assert_eq!(c.form().positions, HandlePositions { min: 70.0, max: 50.0 });

        let out = c.dispatch(ControllerEvent::Config(RangeConfig::default().high_bound(60.0)));
        assert_eq!(c.form().positions, HandlePositions { min: 60.0, max: 50.0 });
        assert_eq!(c.form().corrected(), RangeValue::new(50.0, 60.0));
        assert_eq!(value_changes(&out), vec![RangeValue::new(50.0, 60.0)]);

        c.dispatch(ControllerEvent::Config(
            RangeConfig::default().bounds(55.0, 60.0),
        ));
        assert_eq!(c.form().positions, HandlePositions { min: 60.0, max: 55.0 });
        assert_eq!(c.form().corrected(), RangeValue::new(55.0, 60.0));
    }

    #[test]
    fn stale_swap_orientation_under_corrects() {
        // Known boundary case: the last correction crossed, then a write
        // reordered the handles, so the orientation no longer matches the
        // geometry and the wrong handle is pulled in.
        let mut c = ready(RangeConfig::default());
        c.dispatch(ControllerEvent::ExternalWrite(RawValue::Pair {
            min: 20.0,
            max: 50.0,
        }));
        c.dispatch(handle(HandleRole::Min, HandleEventKind::Commit, 60.0));
        c.dispatch(ControllerEvent::ExternalWrite(RawValue::Pair {
            min: 20.0,
            max: 80.0,
        }));
        assert!(c.form().swapped);

        c.dispatch(ControllerEvent::Config(RangeConfig::default().high_bound(70.0)));
        assert_eq!(c.form().positions, HandlePositions { min: 70.0, max: 80.0 });
        assert_eq!(c.form().corrected(), RangeValue::new(70.0, 80.0));
    }

    #[test]
    fn orientation_change_clears_the_old_axes() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::Config(RangeConfig::default().vertical(true)));
        assert_eq!(
            out.as_slice(),
            &[
                Notification::Style {
                    property: StyleProperty::Width,
                    percent: None
                },
                Notification::Style {
                    property: StyleProperty::MarginLeft,
                    percent: None
                },
                Notification::Style {
                    property: StyleProperty::Height,
                    percent: Some(100.0)
                },
                Notification::Style {
                    property: StyleProperty::Bottom,
                    percent: Some(0.0)
                },
            ]
        );
    }

    #[test]
    fn step_change_alone_does_not_touch_geometry() {
        let mut c = ready(RangeConfig::default());
        let out = c.dispatch(ControllerEvent::Config(RangeConfig::default().step(1.0)));
        assert!(out.is_empty());
        assert_eq!(c.config().step, 1.0);
    }

    #[test]
    fn disposed_controller_ignores_everything() {
        let mut c = ready(RangeConfig::default());
        c.dispose();
        assert_eq!(c.lifecycle(), Lifecycle::Disposed);
        assert!(
            c.dispatch(ControllerEvent::ExternalWrite(RawValue::Scalar(5.0)))
                .is_empty()
        );
        assert_eq!(c.attach().unwrap_err(), LifecycleError::Disposed);
        assert_eq!(c.form().corrected(), RangeValue::DEFAULT);
    }

    #[test]
    fn thumb_labels() {
        let mut c = ready(RangeConfig::default());
        assert_eq!(c.display_value(HandleRole::Min), None);

        c.set_options(SliderOptions {
            thumb_label: true,
            ..SliderOptions::default()
        });
        assert_eq!(c.display_value(HandleRole::Max).as_deref(), Some("100"));

        c.set_display_with(Some(Rc::new(|x| format!("{x:.1} km"))));
        assert_eq!(c.display_value(HandleRole::Min).as_deref(), Some("0.0 km"));
    }

    #[test]
    fn reconcile_is_pure() {
        let p = HandlePositions { min: 10.0, max: 90.0 };
        let config = RangeConfig::default().bounds(20.0, 80.0);
        assert_eq!(
            reconcile_bounds(p, false, &config, ConfigChanges::BOUNDS),
            Some(HandlePositions { min: 20.0, max: 80.0 })
        );
        assert_eq!(
            reconcile_bounds(p, false, &config, ConfigChanges::STEP),
            None
        );

        let crossed = HandlePositions { min: 90.0, max: 10.0 };
        assert_eq!(
            reconcile_bounds(crossed, true, &config, ConfigChanges::BOUNDS),
            Some(HandlePositions { min: 80.0, max: 20.0 })
        );
    }
}
