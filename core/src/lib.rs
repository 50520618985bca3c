//! Util Belt Core - Rust utility library
//!
//! Small collection of standalone utilities with deterministic behavior.
//!
//! # Architecture
//!
//! - **rng**: Deterministic xorshift32 pseudo-random sequence generator
//! - **paths**: Recursive glob-based file/directory enumeration
//! - **logger**: Console logging adapters (console, silent, capturing)
//! - **stack**: LIFO/FIFO stacks with a mutable "current" slot
//!
//! # Critical Invariants
//!
//! 1. The PRNG reproduces its reference golden sequences bit for bit
//! 2. All PRNG arithmetic wraps as 32-bit signed two's complement
//! 3. Generator instances are fully independent (no shared state)

// Module declarations
pub mod logger;
pub mod paths;
pub mod rng;
pub mod stack;

// Re-exports for convenience
pub use logger::{ConsoleLogger, Logger, SilentLogger, TestLogger};
pub use paths::{
    get_directory_paths, get_file_paths, get_paths, PathQuery, PathSelection, PathsError,
};
pub use rng::Xorshift32;
pub use stack::{Fifo, Lifo, Stack};
