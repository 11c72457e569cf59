//! Core diagnostic and error types for the interpreter runtime services.
//!
//! This crate provides the foundational types shared by the bytecode
//! compiler and the interpreter's runtime built-ins:
//!
//! - [`DiagnosticContext`] - Bytecode location of the executing instruction
//! - [`CodeUnitId`] - Identity of a compiled code unit
//! - [`ErrorValue`] - Runtime error values handed to the unwinding path
//! - [`RuntimeErrorKind`] - The runtime error taxonomy
//!
//! # Examples
//!
//! ```
//! use core_types::{create_undefined_variable_error, CodeUnitId, DiagnosticContext, RuntimeErrorKind};
//!
//! let ctx = DiagnosticContext::new(CodeUnitId::new(3), 42);
//! let error = create_undefined_variable_error("foo", ctx);
//!
//! assert_eq!(error.kind, RuntimeErrorKind::UndefinedVariable);
//! assert!(error.message.contains("foo"));
//! assert_eq!(error.location, Some(ctx));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod diagnostic;
mod error;

pub use diagnostic::{CodeUnitId, DiagnosticContext};
pub use error::{
    create_interrupted_execution_exception, create_invalid_param_error,
    create_not_a_constructor_error, create_not_a_function_error, create_not_an_object_error,
    create_stack_overflow_error, create_undefined_variable_error, ErrorValue, RuntimeErrorKind,
};
