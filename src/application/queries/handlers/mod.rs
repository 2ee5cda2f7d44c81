//! Query Handlers

mod card_handlers;

pub use card_handlers::ListCardsHandler;
