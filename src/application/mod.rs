// Application layer - Use cases and the series capability they depend on
pub mod pages;
pub mod series_source;
pub mod summary;
pub mod view_service;
