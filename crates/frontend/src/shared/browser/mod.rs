pub mod location;
pub mod reveal;
pub mod scroll;
