pub mod dish_card;
pub mod filters;
pub mod page;

pub use page::MenuPage;
