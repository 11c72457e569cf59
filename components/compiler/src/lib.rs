//! Compile-time support services for the bytecode compiler.
//!
//! This crate provides the label-scope machinery the compiler uses while
//! walking structured statements (loops, switches, labeled statements):
//!
//! - [`LabelScopeStack`] - Nested break/continue contexts with jump-target
//!   resolution
//! - [`JumpTarget`] - Placeholder for a bytecode address, finalized when the
//!   owning block closes
//! - [`CompileError`] - Errors that abort compilation of the enclosing unit
//!
//! # Example
//!
//! ```
//! use compiler::{LabelScopeStack, ScopeKind};
//!
//! let mut scopes = LabelScopeStack::new();
//! let outer = scopes.enter(ScopeKind::Loop, Some("outer"), 0);
//!
//! // `continue outer;` inside the loop body
//! let target = scopes.resolve_continue(Some("outer")).unwrap();
//! assert_eq!(scopes.pending_references(target), 1);
//!
//! // Loop body closes: targets get concrete instruction addresses.
//! scopes.leave(outer, 24, Some(4)).unwrap();
//! assert_eq!(scopes.address_of(target), Some(4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod label_scope;

pub use error::CompileError;
pub use label_scope::{JumpTarget, LabelScopeStack, ScopeHandle, ScopeKind};
