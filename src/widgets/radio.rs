use super::{Element, Widget, WidgetKind};
use crate::core::{DomNode, Session};
use crate::errors::{Result, TesterError};

widget! {
    /// `st.radio`. The resolved node is the whole group; its first `label`
    /// names the group and every later `label` is an option.
    Radio => WidgetKind::Radio
}

impl<'s, S: Session + 's> Radio<'s, S> {
    /// Clicks the first option whose text is exactly `option_text`.
    pub fn select_radio_option(&self, option_text: &str) -> Result<()> {
        let labels = self.element.target().find_all_by_tag("label")?;
        for label in labels.iter().skip(1) {
            if label.text()? == option_text {
                return label.click();
            }
        }
        Err(TesterError::OptionNotFound(option_text.to_string()))
    }

    /// Option texts in page order, read fresh from the page on every call.
    pub fn get_radio_options(&self) -> Result<Vec<String>> {
        self.element
            .target()
            .find_all_by_tag("label")?
            .iter()
            .skip(1)
            .map(DomNode::text)
            .collect()
    }
}
