use heapless::Vec;
use statig::blocking::IntoStateMachineExt as _;

mod hsm;

use hsm::GestureHsm;

use super::{
    config::GestureConfig,
    sample::SampleBuffer,
    types::{ContactPoint, GestureEvent, GestureEventKind, SessionPhase, TouchState},
};

/// Upper bound of events a single dispatch can produce
/// (stale long-press, cancel of a dangling session, end, gesture).
pub const MAX_EVENTS_PER_DISPATCH: usize = 4;

/// Which resolutions the owner is able to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub tap: bool,
    pub long_press: bool,
}

impl Capabilities {
    pub const ALL: Self = Self {
        tap: true,
        long_press: true,
    };
    pub const NONE: Self = Self {
        tap: false,
        long_press: false,
    };
}

#[derive(Clone, Copy, Debug)]
enum GestureHsmEvent {
    Start(ContactPoint),
    Move(ContactPoint),
    End(ContactPoint),
    Cancel { now_ms: u64 },
    Timer { now_ms: u64 },
    Detach,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureOutput {
    pub events: Vec<GestureEvent, MAX_EVENTS_PER_DISPATCH>,
    /// The host should suppress the platform's default touch-move handling.
    pub prevent_default: bool,
}

impl GestureOutput {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = GestureEventKind> + '_ {
        self.events.iter().map(|event| event.kind)
    }

    /// Resolved gestures (tap, long-press, swipe) in emission order.
    pub fn gestures(&self) -> impl Iterator<Item = GestureEventKind> + '_ {
        self.kinds().filter(|kind| kind.is_gesture())
    }
}

#[derive(Debug, Default)]
struct DispatchContext {
    output: GestureOutput,
}

impl DispatchContext {
    fn emit(&mut self, event: GestureEvent) {
        if self.output.events.push(event).is_err() {
            log::warn!("gesture output full, dropping {}", event.kind.label());
        }
    }

    fn finish(self) -> GestureOutput {
        self.output
    }
}

/// Contact-event state machine for one bound element.
pub struct GestureEngine {
    machine: statig::blocking::StateMachine<GestureHsm>,
    prevent_default_touch_move: bool,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default(), Capabilities::ALL)
    }
}

impl GestureEngine {
    pub fn new(config: GestureConfig, capabilities: Capabilities) -> Self {
        Self {
            machine: GestureHsm::new(config, capabilities).state_machine(),
            prevent_default_touch_move: config.prevent_default_touch_move,
        }
    }

    pub fn start(&mut self, point: ContactPoint) -> GestureOutput {
        self.dispatch_at(point.t_ms, GestureHsmEvent::Start(point))
    }

    pub fn moved(&mut self, point: ContactPoint) -> GestureOutput {
        let mut output = self.dispatch_at(point.t_ms, GestureHsmEvent::Move(point));
        output.prevent_default = self.prevent_default_touch_move;
        output
    }

    pub fn end(&mut self, point: ContactPoint) -> GestureOutput {
        self.dispatch_at(point.t_ms, GestureHsmEvent::End(point))
    }

    pub fn cancel(&mut self, now_ms: u64) -> GestureOutput {
        self.dispatch_at(now_ms, GestureHsmEvent::Cancel { now_ms })
    }

    /// Delivers the long-press deadline if it has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> GestureOutput {
        let mut context = DispatchContext::default();
        self.machine
            .handle_with_context(&GestureHsmEvent::Timer { now_ms }, &mut context);
        context.finish()
    }

    /// Drops the session and any pending timer without reporting a gesture.
    pub fn detach(&mut self) {
        let mut context = DispatchContext::default();
        self.machine
            .handle_with_context(&GestureHsmEvent::Detach, &mut context);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.machine.inner().next_deadline()
    }

    pub fn phase(&self) -> SessionPhase {
        self.machine.inner().phase()
    }

    pub fn state(&self) -> TouchState {
        self.machine.inner().touch_state()
    }

    pub fn samples(&self) -> &SampleBuffer {
        self.machine.inner().samples()
    }

    pub fn config(&self) -> &GestureConfig {
        self.machine.inner().config()
    }

    // Deadlines that elapsed before `now_ms` are delivered ahead of the event,
    // so a late host poll cannot reorder a long-press behind its release.
    fn dispatch_at(&mut self, now_ms: u64, event: GestureHsmEvent) -> GestureOutput {
        let mut context = DispatchContext::default();
        self.machine
            .handle_with_context(&GestureHsmEvent::Timer { now_ms }, &mut context);
        self.machine.handle_with_context(&event, &mut context);
        context.finish()
    }
}
