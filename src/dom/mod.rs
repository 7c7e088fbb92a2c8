pub mod page;
pub mod state;

pub use page::{StaticNode, StaticPage};
pub use state::{Action, Interaction, PageState};
