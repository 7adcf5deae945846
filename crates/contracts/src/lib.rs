//! Общие типы и логика меню, не зависящие от браузера.
//!
//! Фронтенд держит `MenuState` в сигнале и рисует `MenuViewModel`;
//! всё, что решает, какие карточки видны, живёт здесь и тестируется нативно.

pub mod domain;
pub mod shared;
