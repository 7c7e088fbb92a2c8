use crate::core::Session;
use crate::errors::Result;
use crate::widgets::{Button, FileUploader, NumberInput, Radio, Selectbox, TextEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Smoke checks against the demo pages of a Streamlit app.
///
/// Every scenario opens one page, waits for its ready text, drives widgets,
/// then waits for the text the app shows when the widgets were driven right.
///
/// [`Scenario::RadioNavigation`] needs a `radio` page that the stock demo app
/// does not serve, so it only runs when asked for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Scenario {
    ButtonClick,
    FileUpload,
    NumberInput,
    Selectbox,
    RadioNavigation,
}

/// File the upload scenario attaches, relative to the fixtures directory.
pub const UPLOAD_FIXTURE: &str = "test.csv";

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::ButtonClick,
        Scenario::FileUpload,
        Scenario::NumberInput,
        Scenario::Selectbox,
        Scenario::RadioNavigation,
    ];

    /// Scenarios a run covers when none are named.
    pub const DEFAULT: [Scenario; 4] = [
        Scenario::ButtonClick,
        Scenario::FileUpload,
        Scenario::NumberInput,
        Scenario::Selectbox,
    ];

    pub fn runs_by_default(self) -> bool {
        Self::DEFAULT.contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::ButtonClick => "button_click",
            Scenario::FileUpload => "file_upload",
            Scenario::NumberInput => "number_input",
            Scenario::Selectbox => "selectbox",
            Scenario::RadioNavigation => "radio_navigation",
        }
    }

    /// Page path relative to the app base URL.
    pub fn page(self) -> &'static str {
        match self {
            Scenario::ButtonClick => "button_click",
            Scenario::FileUpload => "file_upload",
            Scenario::NumberInput => "number_input",
            Scenario::Selectbox => "selectbox",
            Scenario::RadioNavigation => "radio",
        }
    }

    pub fn ready_text(self) -> &'static str {
        match self {
            Scenario::ButtonClick => "Click Me",
            Scenario::FileUpload => "Upload a file",
            Scenario::NumberInput => "First Number",
            Scenario::Selectbox | Scenario::RadioNavigation => "Subpage Navigator",
        }
    }

    pub fn expected_text(self) -> &'static str {
        match self {
            Scenario::ButtonClick => "You clicked me!",
            Scenario::FileUpload => UPLOAD_FIXTURE,
            Scenario::NumberInput => "3",
            Scenario::Selectbox | Scenario::RadioNavigation => "Hello this is the Second Page",
        }
    }

    /// Performs the widget interactions of this scenario.
    pub fn drive<S: Session>(self, session: &S, fixtures_dir: &Path) -> Result<()> {
        match self {
            Scenario::ButtonClick => Button::find(session, "Click Me")?.click_button(),
            Scenario::FileUpload => FileUploader::find(session, "Upload a file")?
                .enter_input_file(fixtures_dir.join(UPLOAD_FIXTURE)),
            Scenario::NumberInput => {
                NumberInput::find(session, "First Number")?.enter_text(1)?;
                NumberInput::find(session, "Second Number")?.enter_text(2)?;
                Button::find(session, "Add")?.click_button()
            }
            Scenario::Selectbox => {
                Selectbox::find(session, "Subpage Navigator")?
                    .enter_text("Second Page")?
                    .enter_return()?;
                Ok(())
            }
            Scenario::RadioNavigation => {
                Radio::find(session, "Subpage Navigator")?.select_radio_option("Second Page")
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
