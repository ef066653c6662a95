//! Port definitions
//!
//! Ports are the interfaces the application layer uses to reach the outside
//! world. Implementations (adapters) live in the infrastructure layer;
//! tests substitute fakes.

pub mod package_manager;
pub mod process_runner;
pub mod workspace;
