pub mod callbacks;
pub mod classify;
pub mod config;
pub mod engine;
pub mod presets;
pub mod sample;
pub mod timer;
pub mod types;

use crate::error::ConfigError;

pub use callbacks::GestureCallbacks;
pub use config::{active_config, GestureConfig};
pub use engine::{Capabilities, GestureEngine, GestureOutput};
pub use types::{
    ContactPoint, GestureEvent, GestureEventKind, SessionPhase, SwipeDirection, TouchState,
};

pub const TOUCH_ACTIVE_CLASS: &str = "touch-active";

/// Gesture session bound to a single UI element.
///
/// The host adapts its platform contact events into [`ContactPoint`]s and
/// forwards them to the four `on_contact_*` handlers, and calls [`poll`]
/// once [`next_deadline`] has passed. Recognized gestures are returned in
/// the [`GestureOutput`] and also delivered to the registered callbacks.
///
/// Dropping the interpreter releases any pending long-press timer.
///
/// [`poll`]: GestureInterpreter::poll
/// [`next_deadline`]: GestureInterpreter::next_deadline
pub struct GestureInterpreter {
    engine: GestureEngine,
    callbacks: GestureCallbacks,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(GestureConfig::default(), GestureCallbacks::new())
    }
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig, callbacks: GestureCallbacks) -> Self {
        let capabilities = Capabilities {
            tap: callbacks.has_tap(),
            long_press: callbacks.has_long_press(),
        };
        Self {
            engine: GestureEngine::new(config, capabilities),
            callbacks,
        }
    }

    pub fn try_new(config: GestureConfig, callbacks: GestureCallbacks) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, callbacks))
    }

    /// Interpreter for hosts that consume the returned events instead of
    /// callbacks: taps and long-presses are recognized without handlers.
    pub fn listening(config: GestureConfig) -> Self {
        Self {
            engine: GestureEngine::new(config, Capabilities::ALL),
            callbacks: GestureCallbacks::new(),
        }
    }

    pub fn on_contact_start(&mut self, point: ContactPoint) -> GestureOutput {
        let output = self.engine.start(point);
        self.deliver(output)
    }

    pub fn on_contact_move(&mut self, point: ContactPoint) -> GestureOutput {
        let output = self.engine.moved(point);
        self.deliver(output)
    }

    pub fn on_contact_end(&mut self, point: ContactPoint) -> GestureOutput {
        let output = self.engine.end(point);
        self.deliver(output)
    }

    pub fn on_contact_cancel(&mut self, now_ms: u64) -> GestureOutput {
        let output = self.engine.cancel(now_ms);
        self.deliver(output)
    }

    pub fn poll(&mut self, now_ms: u64) -> GestureOutput {
        let output = self.engine.poll(now_ms);
        self.deliver(output)
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.engine.next_deadline()
    }

    /// Unbinds from the element: pending timers are dropped, the session is idle.
    pub fn detach(&mut self) {
        self.engine.detach();
    }

    pub fn state(&self) -> TouchState {
        self.engine.state()
    }

    pub fn phase(&self) -> SessionPhase {
        self.engine.phase()
    }

    pub fn start(&self) -> Option<ContactPoint> {
        self.engine.samples().start()
    }

    pub fn last(&self) -> Option<ContactPoint> {
        self.engine.samples().last()
    }

    pub fn config(&self) -> &GestureConfig {
        self.engine.config()
    }

    pub fn touch_class(&self) -> &'static str {
        if self.engine.state().touched {
            TOUCH_ACTIVE_CLASS
        } else {
            ""
        }
    }

    // Callbacks run after the state machine settled, so they observe the
    // post-event state (e.g. `long_pressed` is already set).
    fn deliver(&mut self, output: GestureOutput) -> GestureOutput {
        for kind in output.gestures() {
            self.callbacks.dispatch(kind);
        }
        output
    }
}

impl Drop for GestureInterpreter {
    fn drop(&mut self) {
        self.engine.detach();
    }
}
