pub mod chrome;

pub use chrome::{ChromeNode, ChromeSession};
