//! Runtime error values and the exception factory.
//!
//! The interpreter calls one factory function per failure kind; the
//! returned [`ErrorValue`] is handed straight to the unwinding path and
//! never mutated afterward. The factory only allocates - triggering the
//! actual unwind is the interpreter's job.

use crate::DiagnosticContext;

/// The kind of runtime error.
///
/// These are the abnormal-termination cases the interpreter core can hit
/// while executing a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Execution exceeded the watchdog timeout
    InterruptedExecution,
    /// Call stack depth limit exceeded
    StackOverflow,
    /// Reference to a variable that cannot be resolved
    UndefinedVariable,
    /// Call target is not callable
    InvalidCallTarget,
    /// `new` target is not a constructor
    InvalidConstructTarget,
    /// A value that must be an object is not one
    NotAnObject,
    /// An operation received an argument it cannot accept
    InvalidParameter,
}

/// A runtime error value carrying its message and bytecode location.
///
/// Immutable once constructed; consumed by the interpreter's unwinding
/// mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    /// The kind of failure
    pub kind: RuntimeErrorKind,
    /// Human-readable, specification-accurate message
    pub message: String,
    /// Where the failure happened, when a location is meaningful
    pub location: Option<DiagnosticContext>,
}

impl ErrorValue {
    fn new(kind: RuntimeErrorKind, message: String, location: Option<DiagnosticContext>) -> Self {
        ErrorValue {
            kind,
            message,
            location,
        }
    }
}

/// Create the error raised when the watchdog interrupts execution.
///
/// Carries no location: the interruption signal is process-wide, not tied
/// to any particular instruction.
pub fn create_interrupted_execution_exception() -> ErrorValue {
    ErrorValue::new(
        RuntimeErrorKind::InterruptedExecution,
        "JavaScript execution exceeded timeout.".to_string(),
        None,
    )
}

/// Create the error raised when the call stack depth limit is exceeded.
pub fn create_stack_overflow_error(ctx: DiagnosticContext) -> ErrorValue {
    ErrorValue::new(
        RuntimeErrorKind::StackOverflow,
        "Maximum call stack size exceeded.".to_string(),
        Some(ctx),
    )
}

/// Create the error raised when a variable reference cannot be resolved.
pub fn create_undefined_variable_error(name: &str, ctx: DiagnosticContext) -> ErrorValue {
    ErrorValue::new(
        RuntimeErrorKind::UndefinedVariable,
        format!("Can't find variable: {}", name),
        Some(ctx),
    )
}

/// Create the error raised when an operation receives an invalid argument.
///
/// `op_name` identifies the built-in operation; `value_desc` describes the
/// offending value the way the caller would print it.
pub fn create_invalid_param_error(
    op_name: &str,
    value_desc: &str,
    ctx: DiagnosticContext,
) -> ErrorValue {
    ErrorValue::new(
        RuntimeErrorKind::InvalidParameter,
        format!("'{}' is not a valid argument for '{}'", value_desc, op_name),
        Some(ctx),
    )
}

/// Create the error raised when a `new` target is not a constructor.
pub fn create_not_a_constructor_error(value_desc: &str, ctx: DiagnosticContext) -> ErrorValue {
    ErrorValue::new(
        RuntimeErrorKind::InvalidConstructTarget,
        format!("{} is not a constructor", value_desc),
        Some(ctx),
    )
}

/// Create the error raised when a call target is not callable.
pub fn create_not_a_function_error(value_desc: &str, ctx: DiagnosticContext) -> ErrorValue {
    ErrorValue::new(
        RuntimeErrorKind::InvalidCallTarget,
        format!("{} is not a function", value_desc),
        Some(ctx),
    )
}

/// Create the error raised when a value that must be an object is not one.
pub fn create_not_an_object_error(value_desc: &str, ctx: DiagnosticContext) -> ErrorValue {
    ErrorValue::new(
        RuntimeErrorKind::NotAnObject,
        format!("{} is not an object", value_desc),
        Some(ctx),
    )
}
