//! Touch gesture interpretation for the cupcake mobile widgets.
//!
//! [`touch::GestureInterpreter`] turns one element's contact stream into
//! taps, long-presses and directional swipes. [`widgets`] builds the
//! swipeable card, drawer and toast controllers on top of it.

pub mod error;
pub mod touch;
pub mod widgets;

pub use error::ConfigError;
pub use touch::{
    ContactPoint, GestureCallbacks, GestureConfig, GestureEvent, GestureEventKind,
    GestureInterpreter, GestureOutput, SessionPhase, SwipeDirection, TouchState,
};
