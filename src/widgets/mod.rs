//! Gesture controllers for the mobile widgets.
//!
//! Each controller owns a swipe-only [`GestureInterpreter`] and turns its
//! output into widget state; rendering stays with the host.
//!
//! [`GestureInterpreter`]: crate::touch::GestureInterpreter

pub mod drawer;
pub mod swipeable_card;
pub mod toast;

pub use drawer::{DrawerPosition, MobileDrawer};
pub use swipeable_card::{ActionStyle, CardAction, CardFeedback, SwipeableCard};
pub use toast::{MobileToast, ToastEvent, ToastVariant};

/// Length of the drawer and toast exit transitions.
pub const EXIT_ANIMATION_MS: u64 = 300;
