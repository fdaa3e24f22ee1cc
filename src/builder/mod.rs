//! Builder API for ergonomic table and machine construction.
//!
//! This module provides fluent builders and macros for creating tables and
//! machines with minimal boilerplate. The builders are also where optional
//! hardening lives: duplicate-rule detection and closed-set validation.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use table::TableBuilder;
