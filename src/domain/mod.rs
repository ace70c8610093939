// Domain layer - Motors, samples, view models and navigation
pub mod catalog;
pub mod motor;
pub mod navigation;
pub mod page;
pub mod telemetry;
