//! Внешний API стола.
//!
//! Здесь описываются:
//! - команды (commands.rs) – всё, что меняет состояние (действие игрока, новая раздача, рассадка);
//! - запросы (queries.rs) – только чтение;
//! - DTO (dto.rs) – ответы на команды;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
