// Infrastructure layer - Configuration, response encoding and the simulated feed
pub mod config;
pub mod http_response;
pub mod synthetic;
pub mod synthetic_source;
