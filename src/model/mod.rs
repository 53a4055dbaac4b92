pub mod config;
pub mod excuse;

pub use config::Config;
pub use excuse::*;
