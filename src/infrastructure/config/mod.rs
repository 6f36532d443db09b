//! Configuration infrastructure module

mod store;

pub use store::TomlConfigStore;
