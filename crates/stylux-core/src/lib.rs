pub mod config;
pub mod error;
pub mod types;

pub use config::StyluxConfig;
pub use error::{Result, StyluxError};
pub use types::*;
