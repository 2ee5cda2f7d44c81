//! Command Handlers

mod card_handlers;

pub use card_handlers::{CreateCardHandler, DeleteCardHandler, UpdateCardHandler};
