pub mod effect;
pub mod intent;
pub mod key_bindings;
pub mod reducer;
pub mod runner;

pub use runner::Runtime;
