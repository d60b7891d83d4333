#[path = "01_discover.rs"]
pub mod discover;
#[path = "02_catalog.rs"]
pub mod catalog;
#[path = "03_generate.rs"]
pub mod generate;
