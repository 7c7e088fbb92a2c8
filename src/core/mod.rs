pub mod config;
pub mod driver;

pub use config::{AppConfig, BrowserConfig, Config, SessionConfig, Viewport};
pub use driver::{DomNode, Key, Navigator, Session};
