use super::{Element, Widget, WidgetKind};
use crate::core::{DomNode, Session};
use crate::errors::Result;
use std::path::Path;

widget! {
    /// `st.file_uploader`, found through its `data-testid` attribute.
    FileUploader => WidgetKind::FileUploader
}

impl<'s, S: Session + 's> FileUploader<'s, S> {
    /// Hands `path` to the hidden file input. Existing content is not cleared first.
    pub fn enter_input_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.element.target().attach_file(path.as_ref())
    }
}
