use crate::core::{Config, DomNode, Key, Navigator, Session};
use crate::errors::{Result, TesterError};
use headless_chrome::browser::tab::{ModifierKey, NoElementFound};
use headless_chrome::util::Timeout;
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// A Chrome tab pointed at a Streamlit app.
pub struct ChromeSession {
    // Dropping the browser closes the tab.
    _browser: Browser,
    tab: Arc<Tab>,
    base_url: Url,
}

pub struct ChromeNode<'a>(Element<'a>);

impl ChromeSession {
    pub fn launch(config: &Config) -> Result<Self> {
        let base_url = base_url(&config.app.base_url)?;

        let window_size_arg = format!(
            "--window-size={},{}",
            config.browser.viewport.width, config.browser.viewport.height
        );
        let user_agent_arg = config
            .browser
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));

        let mut args = vec![
            OsStr::new("--no-sandbox"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new(&window_size_arg),
        ];

        if let Some(ref ua_arg) = user_agent_arg {
            args.push(OsStr::new(ua_arg));
        }

        for arg in &config.browser.args {
            args.push(OsStr::new(arg));
        }

        let launch_options = LaunchOptions::default_builder()
            .headless(config.browser.headless)
            .args(args)
            .build()
            .map_err(|e| TesterError::LaunchFailed(e.to_string()))?;

        let browser =
            Browser::new(launch_options).map_err(|e| TesterError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| TesterError::LaunchFailed(e.to_string()))?;
        tab.set_default_timeout(Duration::from_millis(config.browser.element_timeout_ms));

        info!(
            base_url = %base_url,
            headless = config.browser.headless,
            "browser session started"
        );

        Ok(Self {
            _browser: browser,
            tab,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Waits up to the tab's default timeout for at least one match.
    fn query(&self, selector: &str) -> Result<Vec<ChromeNode<'_>>> {
        let elements = none_found_is_empty(self.tab.wait_for_elements(selector))?;
        Ok(elements.into_iter().map(ChromeNode).collect())
    }
}

impl Session for ChromeSession {
    type Node<'a> = ChromeNode<'a>;

    fn find_by_class(&self, class_name: &str) -> Result<Vec<ChromeNode<'_>>> {
        self.query(&format!(".{}", class_name))
    }

    fn find_by_css(&self, selector: &str) -> Result<Vec<ChromeNode<'_>>> {
        self.query(selector)
    }
}

impl Navigator for ChromeSession {
    fn open(&self, path: &str) -> Result<()> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TesterError::NavigationFailed(format!("{}: {}", path, e)))?;
        debug!(%url, "navigating");

        self.tab
            .navigate_to(url.as_str())
            .map_err(|e| TesterError::NavigationFailed(e.to_string()))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| TesterError::NavigationFailed(e.to_string()))?;

        Ok(())
    }

    fn page_text(&self) -> Result<String> {
        let result = self
            .tab
            .evaluate("document.body ? document.body.innerText : ''", false)?;

        Ok(result
            .value
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .unwrap_or_default())
    }
}

impl DomNode for ChromeNode<'_> {
    fn find_by_tag(&self, tag: &str) -> Result<Self> {
        Ok(ChromeNode(self.0.find_element(tag)?))
    }

    fn find_all_by_tag(&self, tag: &str) -> Result<Vec<Self>> {
        let elements = none_found_is_empty(self.0.find_elements(tag))?;
        Ok(elements.into_iter().map(ChromeNode).collect())
    }

    fn text(&self) -> Result<String> {
        Ok(self.0.get_inner_text()?.trim().to_string())
    }

    fn send_text(&self, text: &str) -> Result<()> {
        self.0.type_into(text)?;
        Ok(())
    }

    fn press(&self, key: Key) -> Result<()> {
        self.0.focus()?;
        let tab = self.0.parent;
        match key {
            Key::SelectAll => tab.press_key_with_modifiers("a", Some(&[ModifierKey::Ctrl]))?,
            Key::Delete => tab.press_key("Delete")?,
            Key::Return => tab.press_key("Enter")?,
        };
        Ok(())
    }

    fn click(&self) -> Result<()> {
        self.0.click()?;
        Ok(())
    }

    fn attach_file(&self, path: &Path) -> Result<()> {
        let absolute = std::fs::canonicalize(path)?;
        let absolute = absolute.to_str().ok_or_else(|| {
            TesterError::ConfigurationError(format!(
                "upload path is not valid UTF-8: {}",
                absolute.display()
            ))
        })?;
        self.0.set_input_files(&[absolute])?;
        Ok(())
    }
}

/// An empty match surfaces as `NoElementFound`, or as `Timeout` once a wait
/// gives up. Neither is a failure for a candidate query.
fn none_found_is_empty<T>(found: anyhow::Result<Vec<T>>) -> Result<Vec<T>> {
    match found {
        Ok(elements) => Ok(elements),
        Err(e) if e.is::<NoElementFound>() || e.is::<Timeout>() => Ok(Vec::new()),
        Err(e) => Err(TesterError::Driver(e)),
    }
}

/// Parses the app URL, making sure relative page paths join below it.
fn base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| {
        TesterError::ConfigurationError(format!("invalid base_url '{}': {}", raw, e))
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
