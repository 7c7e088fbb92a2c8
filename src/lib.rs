pub mod browser;
pub mod core;
pub mod dom;
pub mod errors;
pub mod scenarios;
pub mod testing;
pub mod types;
pub mod widgets;

#[cfg(test)]
mod fixtures;

pub use browser::ChromeSession;
pub use crate::core::{Config, DomNode, Key, Navigator, Session};
pub use dom::StaticPage;
pub use errors::{Result, TesterError};
pub use scenarios::Scenario;
pub use testing::{wait_for_text, ScenarioRunner};
pub use types::{RunReport, ScenarioOutcome};
pub use widgets::{
    Button, Checkbox, FileUploader, NumberInput, Radio, Selectbox, TextEntry, TextInput, Widget,
    WidgetKind,
};
