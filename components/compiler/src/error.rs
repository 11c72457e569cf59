//! Compile-time error taxonomy.
//!
//! All of these are fatal to the compilation unit that triggered them and
//! are reported synchronously to the caller; nothing here is retried.

use thiserror::Error;

/// An error raised while compiling structured control flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A `break`/`continue` named a label with no matching enclosing scope,
    /// or an unlabeled `break` found nothing to break out of.
    #[error("undefined label{}", display_label(.label))]
    UnresolvedLabel {
        /// The label that failed to resolve, when one was given
        label: Option<String>,
    },

    /// A `continue` resolved to a switch or plain labeled statement, or
    /// found no enclosing loop at all.
    #[error("continue is only valid inside a loop statement{}", display_label(.label))]
    ContinueOutsideLoop {
        /// The label the `continue` named, when one was given
        label: Option<String>,
    },

    /// `leave` was called with a stale handle or out of stack order.
    #[error("label scope left out of order")]
    UnbalancedScope,
}

fn display_label(label: &Option<String>) -> String {
    match label {
        Some(name) => format!(": '{}'", name),
        None => String::new(),
    }
}
