use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use duet_core::{Emitter, Scope};

use crate::{
    ControllerEvent, DisplayWith, FillStyle, HandleEventKind, HandleRole, Lifecycle,
    LifecycleError, Notification, Notifications, RangeConfig, RangeSliderController, RangeValue,
    RawValue, SliderHandles, SliderOptions, StyleSink,
};

pub type OnChange = Rc<dyn Fn(RangeValue)>;
pub type OnTouched = Rc<dyn Fn()>;

/// Form-binding contract: how a form framework reads and writes the slider.
pub trait ValueAccessor {
    fn write_value(&self, raw: RawValue);
    fn register_on_change(&self, f: OnChange);
    fn register_on_touched(&self, f: OnTouched);
    fn set_disabled_state(&self, disabled: bool);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSliderChange {
    pub value: RangeValue,
}

struct Attached {
    handles: Rc<SliderHandles>,
    sink: Rc<RefCell<dyn StyleSink>>,
}

#[derive(Clone, Default)]
struct Outputs {
    change: Emitter<RangeSliderChange>,
    input: Emitter<RangeSliderChange>,
    value_change: Emitter<RangeValue>,
    on_change: Rc<RefCell<Option<OnChange>>>,
    on_touched: Rc<RefCell<Option<OnTouched>>>,
}

struct Shared {
    controller: RefCell<RangeSliderController>,
    outputs: Outputs,
    attached: RefCell<Option<Attached>>,
    pending: RefCell<VecDeque<Notification>>,
    delivering: Cell<bool>,
}

impl Shared {
    fn dispatch(&self, event: ControllerEvent) {
        let notes = self.controller.borrow_mut().dispatch(event);
        self.deliver(notes);
    }

    // Runs with no controller borrow held, so listeners may call back in.
    // Notifications raised by a nested call are queued behind the current
    // batch and drained by the outermost delivery.
    fn deliver(&self, notes: Notifications) {
        self.pending.borrow_mut().extend(notes);
        if self.delivering.replace(true) {
            return;
        }
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(note) = next else { break };
            self.deliver_one(note);
        }
        self.delivering.set(false);
    }

    fn deliver_one(&self, note: Notification) {
        match note {
            Notification::Input(value) => {
                self.outputs.input.emit(&RangeSliderChange { value });
            }
            Notification::Change(value) => {
                self.outputs.change.emit(&RangeSliderChange { value });
            }
            Notification::ValueChange(value) => self.outputs.value_change.emit(&value),
            Notification::FormChange(value) => {
                let cb = self.outputs.on_change.borrow().clone();
                if let Some(cb) = cb {
                    cb(value);
                }
            }
            Notification::Touched => {
                let cb = self.outputs.on_touched.borrow().clone();
                if let Some(cb) = cb {
                    cb();
                }
            }
            Notification::Positions(positions) => {
                let handles = self.attached.borrow().as_ref().map(|a| a.handles.clone());
                if let Some(handles) = handles {
                    handles.sync(positions);
                }
            }
            Notification::Style { property, percent } => {
                let sink = self.attached.borrow().as_ref().map(|a| a.sink.clone());
                if let Some(sink) = sink {
                    sink.borrow_mut().set_style(property, percent);
                }
            }
        }
    }
}

/// A range slider bound to a two-handle widget and a style sink.
///
/// ```rust
/// use std::rc::Rc;
/// use duet_slider::*;
///
/// struct NoSink;
/// impl StyleSink for NoSink {
///     fn set_style(&mut self, _: StyleProperty, _: Option<f64>) {}
/// }
///
/// let slider = RangeSlider::new(RangeConfig::default());
/// let handles = Rc::new(SliderHandles::new(slider.value().into()));
/// slider.attach(handles.clone(), NoSink).unwrap();
///
/// handles.min.drag_to(70.0);
/// handles.min.drag_to(110.0);
/// assert_eq!(slider.value(), RangeValue::new(100.0, 110.0));
/// ```
pub struct RangeSlider {
    shared: Rc<Shared>,
    scope: Scope,
}

impl RangeSlider {
    pub fn new(config: RangeConfig) -> Self {
        Self::with_options(config, SliderOptions::default())
    }

    pub fn with_options(config: RangeConfig, options: SliderOptions) -> Self {
        Self {
            shared: Rc::new(Shared {
                controller: RefCell::new(RangeSliderController::with_options(config, options)),
                outputs: Outputs::default(),
                attached: RefCell::new(None),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
            scope: Scope::new(),
        }
    }

    /// Binds the widget. Every handle channel is subscribed for the lifetime
    /// of the slider and released together by [`Self::dispose`].
    pub fn attach(
        &self,
        handles: Rc<SliderHandles>,
        sink: impl StyleSink + 'static,
    ) -> Result<(), LifecycleError> {
        let notes = self.shared.controller.borrow_mut().attach()?;
        handles.set_disabled(self.is_disabled());
        *self.shared.attached.borrow_mut() = Some(Attached {
            handles: handles.clone(),
            sink: Rc::new(RefCell::new(sink)),
        });

        for role in HandleRole::BOTH {
            let handle = handles.handle(role);
            let channels = [
                (&handle.input, HandleEventKind::Live),
                (&handle.change, HandleEventKind::Commit),
                (&handle.value_change, HandleEventKind::Value),
            ];
            for (channel, kind) in channels {
                let shared: Weak<Shared> = Rc::downgrade(&self.shared);
                channel.subscribe_in(&self.scope, move |position| {
                    if let Some(shared) = shared.upgrade() {
                        shared.dispatch(ControllerEvent::Handle {
                            role,
                            kind,
                            position: *position,
                        });
                    }
                });
            }
        }

        self.shared.deliver(notes);
        Ok(())
    }

    /// Cancels every widget subscription and stops reacting.
    pub fn dispose(&self) {
        self.shared.controller.borrow_mut().dispose();
        self.scope.clone().dispose();
        self.shared.attached.borrow_mut().take();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.shared.controller.borrow().lifecycle()
    }

    pub fn value(&self) -> RangeValue {
        self.shared.controller.borrow_mut().value()
    }

    /// Two-way bound `value` input. Same path as [`ValueAccessor::write_value`].
    pub fn set_value(&self, raw: impl Into<RawValue>) {
        self.shared.dispatch(ControllerEvent::ExternalWrite(raw.into()));
    }

    pub fn config(&self) -> RangeConfig {
        self.shared.controller.borrow().config().clone()
    }

    pub fn set_config(&self, config: RangeConfig) {
        self.shared.dispatch(ControllerEvent::Config(config));
    }

    pub fn update_config(&self, f: impl FnOnce(RangeConfig) -> RangeConfig) {
        self.set_config(f(self.config()));
    }

    pub fn options(&self) -> SliderOptions {
        self.shared.controller.borrow().options().clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.shared.controller.borrow().is_disabled()
    }

    pub fn set_display_with(&self, f: impl Fn(f64) -> String + 'static) {
        let f: DisplayWith = Rc::new(f);
        self.shared.controller.borrow_mut().set_display_with(Some(f));
    }

    pub fn display_value(&self, role: HandleRole) -> Option<String> {
        self.shared.controller.borrow().display_value(role)
    }

    pub fn tick_positions(&self) -> Vec<f64> {
        self.shared.controller.borrow().tick_positions()
    }

    pub fn fill_style(&self) -> FillStyle {
        self.shared.controller.borrow().fill_style()
    }

    /// Fires on commit.
    pub fn change(&self) -> &Emitter<RangeSliderChange> {
        &self.shared.outputs.change
    }

    /// Fires while a handle is dragged.
    pub fn input(&self) -> &Emitter<RangeSliderChange> {
        &self.shared.outputs.input
    }

    /// Fires whenever the corrected pair changes.
    pub fn value_change(&self) -> &Emitter<RangeValue> {
        &self.shared.outputs.value_change
    }
}

impl ValueAccessor for RangeSlider {
    fn write_value(&self, raw: RawValue) {
        self.set_value(raw);
    }

    fn register_on_change(&self, f: OnChange) {
        *self.shared.outputs.on_change.borrow_mut() = Some(f);
    }

    fn register_on_touched(&self, f: OnTouched) {
        *self.shared.outputs.on_touched.borrow_mut() = Some(f);
    }

    fn set_disabled_state(&self, disabled: bool) {
        self.shared.controller.borrow_mut().set_disabled(disabled);
        let handles = self
            .shared
            .attached
            .borrow()
            .as_ref()
            .map(|a| a.handles.clone());
        if let Some(handles) = handles {
            handles.set_disabled(disabled);
        }
    }
}

impl std::fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("controller", &*self.shared.controller.borrow())
            .field("attached", &self.shared.attached.borrow().is_some())
            .field("scope", &self.scope)
            .finish()
    }
}
