//! Collaborators the dialog talks to but does not own.

use std::cell::RefCell;
use std::rc::Rc;

use super::state::DialogId;

/// A button-like control that owns a persisted color and opens the dialog.
pub trait Trigger {
    /// The stored color as a hex string, if any.
    ///
    /// The dialog trims surrounding whitespace before parsing and treats a
    /// blank string as unset, unlike [`hex_to_rgb`](crate::hex_to_rgb), which
    /// takes the hex exactly as given.
    fn current_color(&self) -> Option<String>;

    /// Overwrite the stored color.
    fn set_current_color(&mut self, hex: &str);
}

/// Shared handles let a host keep drawing a trigger while the dialog holds it.
impl<T: Trigger + ?Sized> Trigger for Rc<RefCell<T>> {
    fn current_color(&self) -> Option<String> {
        self.borrow().current_color()
    }

    fn set_current_color(&mut self, hex: &str) {
        self.borrow_mut().set_current_color(hex);
    }
}

impl<T: Trigger + ?Sized> Trigger for Box<T> {
    fn current_color(&self) -> Option<String> {
        (**self).current_color()
    }

    fn set_current_color(&mut self, hex: &str) {
        (**self).set_current_color(hex);
    }
}

/// Host side of modal presentation.
pub trait ModalHost {
    fn show_modal(&mut self, dialog: DialogId);

    fn hide_modal(&mut self, dialog: DialogId);
}
