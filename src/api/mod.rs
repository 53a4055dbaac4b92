pub mod error;
pub mod excuse;
pub mod health;
pub mod openapi;
pub mod proof;
pub mod voice;
