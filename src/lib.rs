pub mod config;
pub mod errors;
pub mod linker;
pub mod reference;
pub mod registry;
pub mod typespec;
pub mod types;
