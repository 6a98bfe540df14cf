pub mod config;
mod directive;
mod error;

pub use directive::*;
pub use error::*;
