pub mod agents;
pub mod commands;
pub mod error;
pub mod hooks;
pub mod io;
pub mod paths;
pub mod quality;
pub mod settings;
pub mod spec_kit;
pub mod templates;

pub use error::{PantheonError, Result};
