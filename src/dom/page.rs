use crate::core::{DomNode, Key, Navigator, Session};
use crate::dom::state::{Action, Interaction, PageState};
use crate::errors::{Result, TesterError};
use anyhow::anyhow;
use scraper::{ElementRef, Html, Selector};
use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A parsed HTML snapshot that behaves like a live session.
///
/// The document never changes. Clicks, keystrokes and file attachments are
/// recorded in order, and text typed into inputs is tracked per node so the
/// effect of an action can be inspected afterwards.
pub struct StaticPage {
    document: Html,
    state: RefCell<PageState>,
}

#[derive(Clone, Copy)]
pub struct StaticNode<'a> {
    page: &'a StaticPage,
    element: ElementRef<'a>,
}

impl StaticPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            state: RefCell::new(PageState::default()),
        }
    }

    pub fn interactions(&self) -> Vec<Interaction> {
        self.state.borrow().interactions.clone()
    }

    /// Xpaths of every clicked node, in click order.
    pub fn clicks(&self) -> Vec<String> {
        self.state
            .borrow()
            .interactions
            .iter()
            .filter(|i| i.action == Action::Click)
            .map(|i| i.xpath.clone())
            .collect()
    }

    /// Current value of the field at `xpath`, if anything was typed into it.
    pub fn field_value(&self, xpath: &str) -> Option<String> {
        self.state
            .borrow()
            .fields
            .get(xpath)
            .map(|field| field.value.clone())
    }

    fn select(&self, selector: &str) -> Result<Vec<StaticNode<'_>>> {
        let parsed = parse_selector(selector)?;
        Ok(self
            .document
            .select(&parsed)
            .map(|element| StaticNode {
                page: self,
                element,
            })
            .collect())
    }
}

impl Session for StaticPage {
    type Node<'a> = StaticNode<'a>;

    fn find_by_class(&self, class_name: &str) -> Result<Vec<StaticNode<'_>>> {
        self.select(&format!(".{}", class_name))
    }

    fn find_by_css(&self, selector: &str) -> Result<Vec<StaticNode<'_>>> {
        self.select(selector)
    }
}

impl Navigator for StaticPage {
    fn open(&self, path: &str) -> Result<()> {
        self.state
            .borrow_mut()
            .record("/", "document", Action::Navigate(path.to_string()));
        Ok(())
    }

    fn page_text(&self) -> Result<String> {
        Ok(normalize_text(self.document.root_element().text()))
    }
}

impl<'a> StaticNode<'a> {
    pub fn xpath(&self) -> String {
        xpath_of(self.element)
    }

    pub fn tag_name(&self) -> &str {
        self.element.value().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Value the field holds now: typed text if any, otherwise its `value` attribute.
    pub fn value(&self) -> String {
        self.page
            .field_value(&self.xpath())
            .unwrap_or_else(|| self.initial_value().to_string())
    }

    fn initial_value(&self) -> &'a str {
        self.attribute("value").unwrap_or_default()
    }

    fn record(&self, action: Action) {
        debug!(xpath = %self.xpath(), ?action, "static page interaction");
        self.page
            .state
            .borrow_mut()
            .record(&self.xpath(), self.tag_name(), action);
    }

    fn wrap(&self, element: ElementRef<'a>) -> Self {
        Self {
            page: self.page,
            element,
        }
    }
}

impl fmt::Debug for StaticNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticNode")
            .field("tag", &self.tag_name())
            .field("xpath", &self.xpath())
            .finish()
    }
}

impl DomNode for StaticNode<'_> {
    fn find_by_tag(&self, tag: &str) -> Result<Self> {
        let selector = parse_selector(tag)?;
        self.element
            .select(&selector)
            .next()
            .map(|element| self.wrap(element))
            .ok_or_else(|| {
                TesterError::Driver(anyhow!(
                    "no such element: <{}> below {}",
                    tag,
                    self.xpath()
                ))
            })
    }

    fn find_all_by_tag(&self, tag: &str) -> Result<Vec<Self>> {
        let selector = parse_selector(tag)?;
        Ok(self
            .element
            .select(&selector)
            .map(|element| self.wrap(element))
            .collect())
    }

    fn text(&self) -> Result<String> {
        Ok(normalize_text(self.element.text()))
    }

    fn send_text(&self, text: &str) -> Result<()> {
        self.page
            .state
            .borrow_mut()
            .apply_text(&self.xpath(), self.initial_value(), text);
        self.record(Action::Text(text.to_string()));
        Ok(())
    }

    fn press(&self, key: Key) -> Result<()> {
        self.page
            .state
            .borrow_mut()
            .apply_key(&self.xpath(), self.initial_value(), key);
        self.record(Action::Key(key));
        Ok(())
    }

    fn click(&self) -> Result<()> {
        self.record(Action::Click);
        Ok(())
    }

    fn attach_file(&self, path: &Path) -> Result<()> {
        self.page
            .state
            .borrow_mut()
            .set_value(&self.xpath(), path.display().to_string());
        self.record(Action::File(path.to_path_buf()));
        Ok(())
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| TesterError::InvalidSelector(format!("{}: {:?}", selector, e)))
}

/// Collapses whitespace runs the way rendered text reads.
fn normalize_text<'t>(fragments: impl Iterator<Item = &'t str>) -> String {
    fragments
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Positional xpath such as `/html[1]/body[1]/div[2]/input[1]`.
fn xpath_of(element: ElementRef<'_>) -> String {
    let mut segments = Vec::new();
    let mut current = Some(element);

    while let Some(node) = current {
        let name = node.value().name();
        let position = node
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .filter(|sibling| sibling.value().name() == name)
            .count()
            + 1;
        segments.push(format!("{}[{}]", name, position));
        current = node.parent().and_then(ElementRef::wrap);
    }

    segments.reverse();
    format!("/{}", segments.join("/"))
}
