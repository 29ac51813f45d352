pub mod controller;
pub mod error;

pub use controller::{PromptState, SearchController, SearchSession, SearchSnapshot};
pub use error::SearchError;
