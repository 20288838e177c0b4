pub mod config;
pub mod entities;
pub mod error;
pub mod signals;
pub mod types;

pub use config::Config;
pub use entities::*;
pub use error::IdError;
pub use signals::{ChainSignal, Signal};
pub use types::*;
