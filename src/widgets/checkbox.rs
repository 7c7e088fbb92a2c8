use super::{Element, Widget, WidgetKind};
use crate::core::{DomNode, Session};
use crate::errors::Result;

widget! {
    /// `st.checkbox`. The clickable node is the `span` drawn as the box.
    Checkbox => WidgetKind::Checkbox
}

impl<'s, S: Session + 's> Checkbox<'s, S> {
    pub fn check_box(&self) -> Result<()> {
        self.element.target().click()
    }
}
