mod catalog;

pub use catalog::HttpCatalog;
