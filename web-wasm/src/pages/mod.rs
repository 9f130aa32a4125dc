pub mod favorites;
pub mod product_detail;
pub mod product_listing;
