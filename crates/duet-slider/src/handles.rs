use duet_core::{Emitter, Signal, signal};

use crate::{HandlePositions, HandleRole};

/// One draggable thumb, as seen by the controller.
///
/// A widget backend owns the thumb and forwards pointer and keyboard
/// activity through the three emitters: `input` while dragging, `change`
/// once per commit and `value_change` whenever the thumb settles on a value.
#[derive(Clone, Debug)]
pub struct SliderHandle {
    pub position: Signal<f64>,
    pub disabled: Signal<bool>,
    pub input: Emitter<f64>,
    pub change: Emitter<f64>,
    pub value_change: Emitter<f64>,
}

impl SliderHandle {
    pub fn new(position: f64) -> Self {
        Self {
            position: signal(position),
            disabled: signal(false),
            input: Emitter::new(),
            change: Emitter::new(),
            value_change: Emitter::new(),
        }
    }

    /// Live drag tick.
    pub fn drag_to(&self, x: f64) {
        if self.disabled.get() {
            return;
        }
        self.position.set(x);
        self.input.emit(&x);
    }

    /// Releases the thumb where it currently is.
    pub fn release(&self) {
        if self.disabled.get() {
            return;
        }
        let x = self.position.get();
        self.value_change.emit(&x);
        self.change.emit(&x);
    }

    /// Discrete move (click on the track, arrow key).
    pub fn step_to(&self, x: f64) {
        if self.disabled.get() {
            return;
        }
        self.position.set(x);
        self.value_change.emit(&x);
        self.change.emit(&x);
    }
}

/// The pair of thumbs making up a range widget.
#[derive(Clone, Debug)]
pub struct SliderHandles {
    pub min: SliderHandle,
    pub max: SliderHandle,
}

impl SliderHandles {
    pub fn new(positions: HandlePositions) -> Self {
        Self {
            min: SliderHandle::new(positions.min),
            max: SliderHandle::new(positions.max),
        }
    }

    pub fn handle(&self, role: HandleRole) -> &SliderHandle {
        match role {
            HandleRole::Min => &self.min,
            HandleRole::Max => &self.max,
        }
    }

    pub fn positions(&self) -> HandlePositions {
        HandlePositions {
            min: self.min.position.get(),
            max: self.max.position.get(),
        }
    }

    /// Moves the thumbs to `positions` without firing their event channels.
    pub fn sync(&self, positions: HandlePositions) {
        self.min.position.set_if_changed(positions.min);
        self.max.position.set_if_changed(positions.max);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.min.disabled.set_if_changed(disabled);
        self.max.disabled.set_if_changed(disabled);
    }
}
