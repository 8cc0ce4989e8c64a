//! Core value types shared by every rule.
//!
//! This module contains the data that flows through a validation call:
//! - `ValidationOutcome`: the success/failure result of one evaluation
//! - `ValidationContext`: the object and member being validated
//!
//! Both are plain data. Rule dispatch and message resolution live in
//! [`crate::rule`] and [`crate::message`].

mod context;
mod outcome;

pub use context::ValidationContext;
pub use outcome::ValidationOutcome;
