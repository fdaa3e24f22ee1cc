//! Validation of transition tables against a declared closed set of states.
//!
//! With enum labels the compiler already keeps every state inside the closed
//! set. Tables built from open label types (strings, loaded documents) can
//! still name a state the caller never meant to exist; declaring the set lets
//! the builder catch that before the machine runs.
//!
//! Following Stillwater's `Validation`, every violation is collected in a
//! single pass rather than stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use fsmcell::core::TransitionTable;
//! use fsmcell::validation::{into_result, DeclaredStates, TableViolation};
//!
//! let mut table: TransitionTable<String, String> = TransitionTable::new();
//! table.insert("idle".into(), "FETCH".into(), String::from("lodaing"));
//!
//! let states = DeclaredStates::new(["idle".to_string(), "loading".to_string()]);
//! let errors = into_result(states.validate(None, &table)).unwrap_err();
//!
//! assert!(matches!(errors[0], TableViolation::UndeclaredTarget { .. }));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{into_result, DeclaredStates, TableValidation};
pub use violations::TableViolation;
