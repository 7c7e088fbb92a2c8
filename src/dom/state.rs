use crate::core::Key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Click,
    Text(String),
    Key(Key),
    File(PathBuf),
    Navigate(String),
}

/// One simulated input event, addressed by the node's xpath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub xpath: String,
    pub tag_name: String,
    pub action: Action,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FieldState {
    pub value: String,
    pub selected: bool,
}

/// Everything a [`super::StaticPage`] has been asked to do so far.
#[derive(Debug, Default)]
pub struct PageState {
    pub(crate) interactions: Vec<Interaction>,
    pub(crate) fields: HashMap<String, FieldState>,
}

impl PageState {
    pub fn record(&mut self, xpath: &str, tag_name: &str, action: Action) {
        self.interactions.push(Interaction {
            xpath: xpath.to_string(),
            tag_name: tag_name.to_string(),
            action,
        });
    }

    /// Applies a key press to a field the way a text input would.
    pub(crate) fn apply_key(&mut self, xpath: &str, initial: &str, key: Key) {
        let field = self.field(xpath, initial);
        match key {
            Key::SelectAll => field.selected = true,
            Key::Delete => {
                // Caret sits at the end, so an unselected Delete is a no-op.
                if field.selected {
                    field.value.clear();
                    field.selected = false;
                }
            }
            Key::Return => field.selected = false,
        }
    }

    pub(crate) fn apply_text(&mut self, xpath: &str, initial: &str, text: &str) {
        let field = self.field(xpath, initial);
        if field.selected {
            field.value = text.to_string();
            field.selected = false;
        } else {
            field.value.push_str(text);
        }
    }

    pub(crate) fn set_value(&mut self, xpath: &str, value: String) {
        self.fields.insert(
            xpath.to_string(),
            FieldState {
                value,
                selected: false,
            },
        );
    }

    fn field(&mut self, xpath: &str, initial: &str) -> &mut FieldState {
        self.fields
            .entry(xpath.to_string())
            .or_insert_with(|| FieldState {
                value: initial.to_string(),
                selected: false,
            })
    }
}
