use crate::core::{DomNode, Key, Session};
use crate::errors::{Result, TesterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The widget kinds Streamlit renders that this crate knows how to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    NumberInput,
    TextInput,
    Selectbox,
    Checkbox,
    Radio,
    FileUploader,
    Button,
}

/// How the candidate nodes for a kind are queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    Class(&'static str),
    Css(&'static str),
}

/// Where the identifying label text of a candidate lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// First `label` descendant.
    NestedLabel,
    /// The candidate's own rendered text.
    OwnText,
}

/// What gets stored once a candidate matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// First descendant with this tag.
    Descendant(&'static str),
    /// The candidate itself. Its first label names the group, the rest are options.
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub candidates: Candidates,
    pub label: LabelSource,
    pub target: Target,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 7] = [
        WidgetKind::NumberInput,
        WidgetKind::TextInput,
        WidgetKind::Selectbox,
        WidgetKind::Checkbox,
        WidgetKind::Radio,
        WidgetKind::FileUploader,
        WidgetKind::Button,
    ];

    pub fn lookup(self) -> Lookup {
        use Candidates::{Class, Css};
        use LabelSource::{NestedLabel, OwnText};
        use Target::{Descendant, Group};

        let (candidates, label, target) = match self {
            WidgetKind::NumberInput => (Class("stNumberInput"), NestedLabel, Descendant("input")),
            WidgetKind::TextInput => (Class("stTextInput"), NestedLabel, Descendant("input")),
            WidgetKind::Selectbox => (Class("stSelectbox"), NestedLabel, Descendant("input")),
            WidgetKind::Checkbox => (Class("stCheckbox"), NestedLabel, Descendant("span")),
            WidgetKind::Radio => (Class("stRadio"), NestedLabel, Group),
            WidgetKind::FileUploader => (
                Css(r#"[data-testid="stFileUploader"]"#),
                NestedLabel,
                Descendant("input"),
            ),
            WidgetKind::Button => (Class("stButton"), OwnText, Descendant("button")),
        };

        Lookup {
            candidates,
            label,
            target,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetKind::NumberInput => "number input",
            WidgetKind::TextInput => "text input",
            WidgetKind::Selectbox => "selectbox",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Radio => "radio group",
            WidgetKind::FileUploader => "file uploader",
            WidgetKind::Button => "button",
        };
        f.write_str(name)
    }
}

/// A located Streamlit widget: the label it was found by and the node that
/// receives input.
///
/// There is no unresolved `Element`. Construction either finds the
/// interaction node or fails, and the node is never looked up again.
pub struct Element<'s, S: Session + 's> {
    kind: WidgetKind,
    label: String,
    target: S::Node<'s>,
}

impl<'s, S: Session + 's> Element<'s, S> {
    pub fn resolve(session: &'s S, label: &str, kind: WidgetKind) -> Result<Self> {
        let lookup = kind.lookup();
        let candidates = match lookup.candidates {
            Candidates::Class(class_name) => session.find_by_class(class_name)?,
            Candidates::Css(selector) => session.find_by_css(selector)?,
        };
        debug!(%kind, label, candidates = candidates.len(), "resolving widget");

        let target = match lookup.target {
            Target::Descendant(tag) => resolve_single_label(candidates, label, tag, lookup.label)?,
            Target::Group => resolve_multi_label(candidates, label)?,
        }
        .ok_or_else(|| TesterError::LabelNotFound {
            kind,
            label: label.to_string(),
        })?;

        Ok(Self {
            kind,
            label: label.to_string(),
            target,
        })
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> &S::Node<'s> {
        &self.target
    }

    /// Replaces whatever the target holds with `value`.
    pub fn enter_text(&self, value: impl fmt::Display) -> Result<()> {
        self.target.press(Key::SelectAll)?;
        self.target.press(Key::Delete)?;
        self.target.send_text(&value.to_string())
    }

    pub fn enter_return(&self) -> Result<()> {
        self.target.press(Key::Return)
    }
}

impl<'s, S: Session + 's> fmt::Debug for Element<'s, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// First candidate whose label text equals `label` wins; its first `tag`
/// descendant is returned.
fn resolve_single_label<N: DomNode>(
    candidates: Vec<N>,
    label: &str,
    tag: &str,
    source: LabelSource,
) -> Result<Option<N>> {
    for candidate in candidates {
        let text = match source {
            LabelSource::NestedLabel => candidate.find_by_tag("label")?.text()?,
            LabelSource::OwnText => candidate.text()?,
        };
        debug!(candidate = %text, "comparing label");

        if text == label {
            return candidate.find_by_tag(tag).map(Some);
        }
    }
    Ok(None)
}

fn resolve_multi_label<N: DomNode>(candidates: Vec<N>, label: &str) -> Result<Option<N>> {
    for candidate in candidates {
        let text = candidate.find_by_tag("label")?.text()?;
        debug!(candidate = %text, "comparing group label");

        if text == label {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
