//! The HSV color picker dialog.
//!
//! The dialog owns three gradient sliders (hue, saturation, value) and a
//! preview color. It is opened against a [`Trigger`], keeps the saturation
//! and value gradients in sync with the selected hue while open, and writes
//! the chosen color back to the trigger on commit.
//!
//! Rendering is left to the host; [`ModalHost`] is notified of open/close
//! transitions for hosts that manage modals imperatively.

mod picker;
mod state;
mod trigger;

pub use picker::{ColorPickerDialog, HUE_STOPS};
pub use state::{DialogId, DialogState, SliderKind, SliderValues};
pub use trigger::{ModalHost, Trigger};
