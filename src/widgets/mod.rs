//! Page objects for Streamlit widgets.
//!
//! Each widget is found by the visible label a test author passes in:
//!
//! ```no_run
//! use streamlit_ui_tester::{Button, ChromeSession, Config, Navigator, NumberInput, TextEntry};
//!
//! # fn main() -> streamlit_ui_tester::Result<()> {
//! let session = ChromeSession::launch(&Config::default())?;
//! session.open("number_input")?;
//!
//! NumberInput::find(&session, "First Number")?.enter_text(1)?;
//! NumberInput::find(&session, "Second Number")?.enter_text(2)?;
//! Button::find(&session, "Add")?.click_button()?;
//! # Ok(())
//! # }
//! ```

use crate::core::Session;
use crate::errors::Result;
use std::fmt;

pub mod element;

pub use element::{Candidates, Element, LabelSource, Lookup, Target, WidgetKind};

/// Declares a widget struct wrapping a resolved [`Element`] of one fixed kind.
macro_rules! widget {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        pub struct $name<'s, S: Session + 's> {
            element: Element<'s, S>,
        }

        impl<'s, S: Session + 's> $name<'s, S> {
            /// Locates the widget labelled `label`, failing if none is rendered.
            pub fn find(session: &'s S, label: &str) -> Result<Self> {
                Element::resolve(session, label, $kind).map(|element| Self { element })
            }
        }

        impl<'s, S: Session + 's> Widget<'s, S> for $name<'s, S> {
            fn element(&self) -> &Element<'s, S> {
                &self.element
            }
        }

        impl<'s, S: Session + 's> std::fmt::Debug for $name<'s, S> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.element).finish()
            }
        }
    };
}

mod button;
mod checkbox;
mod file_uploader;
mod input;
mod radio;

pub use button::Button;
pub use checkbox::Checkbox;
pub use file_uploader::FileUploader;
pub use input::{NumberInput, Selectbox, TextInput};
pub use radio::Radio;

/// Shared view of every widget.
pub trait Widget<'s, S: Session + 's> {
    fn element(&self) -> &Element<'s, S>;

    fn label<'a>(&'a self) -> &'a str
    where
        's: 'a,
    {
        self.element().label()
    }

    fn kind(&self) -> WidgetKind {
        self.element().kind()
    }
}

/// Widgets that take typed input. Both actions return the widget so calls chain:
/// `Selectbox::find(&s, "Page")?.enter_text("Second Page")?.enter_return()?`.
pub trait TextEntry<'s, S: Session + 's>: Widget<'s, S> {
    fn enter_text(&self, value: impl fmt::Display) -> Result<&Self> {
        self.element().enter_text(value)?;
        Ok(self)
    }

    fn enter_return(&self) -> Result<&Self> {
        self.element().enter_return()?;
        Ok(self)
    }
}
