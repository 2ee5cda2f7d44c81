mod http_card_client;

pub use http_card_client::{HttpCardClient, HttpCardClientConfig};
