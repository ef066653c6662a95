//! Filesystem adapter

pub mod fs;

pub use fs::FsWorkspace;
