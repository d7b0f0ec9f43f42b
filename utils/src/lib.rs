//! Shared filesystem helpers.

mod atomic_write;

pub use atomic_write::atomic_write;
