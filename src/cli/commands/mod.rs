pub mod goroutine;

pub use goroutine::*;
