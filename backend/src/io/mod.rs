//! Fixture loading.

pub mod loaders;

pub use loaders::TravelLoader;
