pub mod error_message;
pub mod loading_spinner;
pub mod navbar;
pub mod product_card;
