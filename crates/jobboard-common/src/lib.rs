pub mod api_client;
pub mod board_api;
pub mod error;
pub mod model;
