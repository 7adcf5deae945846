pub mod catalog;
pub mod selection;
pub mod state;
pub mod view_model;

pub use catalog::{Catalog, CatalogError, Category, Dish};
pub use selection::Selection;
pub use state::{HistoryUpdate, MenuState, SelectionChange};
pub use view_model::{
    render, CategoryHeading, DishCard, DishImage, FilterControl, MenuEntry, MenuViewModel,
};
