pub mod config;
pub mod placeholder;
pub mod price;
