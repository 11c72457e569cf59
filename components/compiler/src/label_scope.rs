//! Label scopes and jump-target resolution for structured statements.
//!
//! While the compiler walks loops, switches and labeled statements it keeps
//! a stack of the enclosing contexts; `break`/`continue` sites resolve
//! against that stack to a [`JumpTarget`], a placeholder that receives its
//! concrete instruction address only when the owning block closes.
//!
//! Scope entries live in an arena indexed by generational handles, and each
//! target tracks how many emitted jumps still reference it unresolved, so a
//! target can never be finalized out from under a pending jump.

use crate::error::CompileError;

/// The kind of context a scope entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// A loop statement (`for`, `while`, `do..while`); break and continue
    Loop,
    /// A switch statement; break only
    Switch,
    /// A plain labeled statement; break only
    NamedLabel,
}

/// Handle to a not-yet-placed bytecode address.
///
/// Obtained from [`LabelScopeStack::resolve_break`] /
/// [`LabelScopeStack::resolve_continue`]; the concrete address becomes
/// observable once the owning scope is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JumpTarget(u32);

/// Generational handle to an entry on the scope stack.
///
/// A handle is only valid between its `enter` and the matching `leave`;
/// stale handles are rejected rather than silently honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeHandle {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct TargetState {
    address: Option<u32>,
    pending_references: u32,
}

#[derive(Debug)]
struct ScopeEntry {
    kind: ScopeKind,
    label: Option<String>,
    lexical_depth: u32,
    break_target: JumpTarget,
    continue_target: Option<JumpTarget>,
    generation: u32,
}

/// The stack of enclosing break/continue contexts at the current compile
/// point, innermost last.
///
/// Owned exclusively by one compilation in progress; never shared across
/// threads.
#[derive(Debug, Default)]
pub struct LabelScopeStack {
    stack: Vec<ScopeEntry>,
    targets: Vec<TargetState>,
    next_generation: u32,
}

impl LabelScopeStack {
    /// Create an empty scope stack for a fresh compilation unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a scope entry for a loop/switch/labeled statement.
    ///
    /// Allocates a break target for every kind and a continue target only
    /// for [`ScopeKind::Loop`] - continue is undefined for the others.
    /// `lexical_depth` must not decrease relative to the current top; that
    /// matches statement nesting.
    pub fn enter(
        &mut self,
        kind: ScopeKind,
        label: Option<&str>,
        lexical_depth: u32,
    ) -> ScopeHandle {
        debug_assert!(
            self.stack
                .last()
                .map_or(true, |top| lexical_depth >= top.lexical_depth),
            "lexical depth must be non-decreasing while pushing"
        );

        let break_target = self.allocate_target();
        let continue_target = match kind {
            ScopeKind::Loop => Some(self.allocate_target()),
            ScopeKind::Switch | ScopeKind::NamedLabel => None,
        };

        let generation = self.next_generation;
        self.next_generation += 1;

        self.stack.push(ScopeEntry {
            kind,
            label: label.map(str::to_string),
            lexical_depth,
            break_target,
            continue_target,
            generation,
        });

        ScopeHandle {
            index: (self.stack.len() - 1) as u32,
            generation,
        }
    }

    /// Pop the entry `handle` refers to, finalizing its jump targets.
    ///
    /// `break_address` is the instruction just past the block;
    /// `continue_address` is the loop's update/condition re-entry point and
    /// is ignored for entries without a continue target. Only the top of
    /// the stack may be left, and only once; anything else is
    /// [`CompileError::UnbalancedScope`].
    pub fn leave(
        &mut self,
        handle: ScopeHandle,
        break_address: u32,
        continue_address: Option<u32>,
    ) -> Result<(), CompileError> {
        let top_matches = self
            .stack
            .last()
            .is_some_and(|top| top.generation == handle.generation)
            && handle.index as usize == self.stack.len() - 1;
        if !top_matches {
            return Err(CompileError::UnbalancedScope);
        }

        let entry = self
            .stack
            .pop()
            .ok_or(CompileError::UnbalancedScope)?;
        self.bind_target(entry.break_target, break_address);
        if let (Some(target), Some(address)) = (entry.continue_target, continue_address) {
            self.bind_target(target, address);
        }
        Ok(())
    }

    /// Resolve a `break` site to a jump target, innermost-first.
    ///
    /// Unlabeled break matches the nearest entry of any kind; labeled break
    /// matches the first entry carrying that label. The matched target's
    /// pending-reference count is incremented.
    pub fn resolve_break(&mut self, label: Option<&str>) -> Result<JumpTarget, CompileError> {
        let found = self
            .stack
            .iter()
            .rev()
            .find(|entry| match label {
                None => true,
                Some(name) => entry.label.as_deref() == Some(name),
            })
            .map(|entry| entry.break_target);
        match found {
            Some(target) => {
                self.reference_target(target);
                Ok(target)
            }
            None => Err(CompileError::UnresolvedLabel {
                label: label.map(str::to_string),
            }),
        }
    }

    /// Resolve a `continue` site to a jump target, innermost-first.
    ///
    /// Unlabeled continue matches the nearest loop. Labeled continue stops
    /// at the first entry carrying the label; if that entry is a switch or
    /// plain label, continue is invalid there and the resolution fails with
    /// [`CompileError::ContinueOutsideLoop`].
    pub fn resolve_continue(&mut self, label: Option<&str>) -> Result<JumpTarget, CompileError> {
        // Search stops at the first label match, whatever the entry kind
        // turns out to be; unlabeled continue skips non-loops outward.
        let found = match label {
            None => self
                .stack
                .iter()
                .rev()
                .find(|entry| entry.kind == ScopeKind::Loop)
                .and_then(|entry| entry.continue_target.map(Ok)),
            Some(name) => self
                .stack
                .iter()
                .rev()
                .find(|entry| entry.label.as_deref() == Some(name))
                .map(|entry| match entry.continue_target {
                    Some(target) => Ok(target),
                    None => Err(CompileError::ContinueOutsideLoop {
                        label: Some(name.to_string()),
                    }),
                }),
        };
        match found {
            Some(Ok(target)) => {
                self.reference_target(target);
                Ok(target)
            }
            Some(Err(error)) => Err(error),
            None => match label {
                None => Err(CompileError::ContinueOutsideLoop { label: None }),
                Some(name) => Err(CompileError::UnresolvedLabel {
                    label: Some(name.to_string()),
                }),
            },
        }
    }

    /// The finalized instruction address of `target`, once its owning
    /// scope has been left.
    pub fn address_of(&self, target: JumpTarget) -> Option<u32> {
        self.targets.get(target.0 as usize).and_then(|t| t.address)
    }

    /// How many resolved jumps still reference `target` without having
    /// been patched to a concrete instruction.
    pub fn pending_references(&self, target: JumpTarget) -> u32 {
        self.targets
            .get(target.0 as usize)
            .map_or(0, |t| t.pending_references)
    }

    /// Record that the emitter patched one jump referencing `target`.
    pub fn commit_reference(&mut self, target: JumpTarget) {
        if let Some(state) = self.targets.get_mut(target.0 as usize) {
            state.pending_references = state.pending_references.saturating_sub(1);
        }
    }

    /// Number of entries currently on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack has no entries.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn allocate_target(&mut self) -> JumpTarget {
        let id = self.targets.len() as u32;
        self.targets.push(TargetState {
            address: None,
            pending_references: 0,
        });
        JumpTarget(id)
    }

    fn reference_target(&mut self, target: JumpTarget) {
        if let Some(state) = self.targets.get_mut(target.0 as usize) {
            state.pending_references += 1;
        }
    }

    fn bind_target(&mut self, target: JumpTarget, address: u32) {
        if let Some(state) = self.targets.get_mut(target.0 as usize) {
            // A target is bound exactly once, by the scope that owns it.
            debug_assert!(state.address.is_none());
            state.address = Some(address);
        }
    }
}
