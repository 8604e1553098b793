pub mod core;
pub mod session;

pub use checkers_engine;
