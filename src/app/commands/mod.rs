pub mod bump;
pub mod log;
pub mod sync;
