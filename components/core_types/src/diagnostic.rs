//! Bytecode location types for error reporting.
//!
//! The exception factory records where in the compiled bytecode a failure
//! happened; an external source-mapping collaborator turns that back into
//! source text positions.

/// Identity of a compiled code unit (one function or program chunk).
///
/// Opaque to this crate; the compiler hands out ids and the source mapper
/// resolves them back to scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeUnitId(u32);

impl CodeUnitId {
    /// Create a code unit id from its raw value.
    pub fn new(raw: u32) -> Self {
        CodeUnitId(raw)
    }

    /// Get the raw id value.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// The bytecode location an error was raised at.
///
/// An immutable value passed explicitly to the exception factory, so error
/// construction never has to reach into live interpreter state.
///
/// # Examples
///
/// ```
/// use core_types::{CodeUnitId, DiagnosticContext};
///
/// let ctx = DiagnosticContext::new(CodeUnitId::new(7), 120);
/// assert_eq!(ctx.bytecode_offset, 120);
/// assert_eq!(ctx.code_unit.raw(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticContext {
    /// The code unit containing the executing instruction
    pub code_unit: CodeUnitId,
    /// Offset of the executing instruction within the unit's bytecode
    pub bytecode_offset: u32,
}

impl DiagnosticContext {
    /// Create a diagnostic context for an instruction within a code unit.
    pub fn new(code_unit: CodeUnitId, bytecode_offset: u32) -> Self {
        DiagnosticContext {
            code_unit,
            bytecode_offset,
        }
    }
}
