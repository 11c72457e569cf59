//! Pattern compilation and matching for the string built-ins.
//!
//! Wraps the external backtracking matcher behind a value that is immutable
//! after construction. Compilation never fails at the call site: an invalid
//! flag string or pattern produces an explicitly invalid [`CompiledPattern`]
//! and the caller decides whether to surface that as a runtime error.

use regex::{Regex, RegexBuilder};

/// Parsed pattern flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    /// Repeat the search past the first match (`g`)
    pub global: bool,
    /// Case-insensitive matching (`i`)
    pub ignore_case: bool,
    /// `^`/`$` match at line boundaries (`m`)
    pub multiline: bool,
}

impl PatternFlags {
    /// Parse a short flag-character string.
    ///
    /// Recognized characters are `g`, `i` and `m`; duplicates and anything
    /// else are errors.
    pub fn parse(flags: &str) -> Result<Self, String> {
        let mut parsed = PatternFlags::default();
        for ch in flags.chars() {
            match ch {
                'g' => {
                    if parsed.global {
                        return Err("Invalid flags: duplicate 'g'".to_string());
                    }
                    parsed.global = true;
                }
                'i' => {
                    if parsed.ignore_case {
                        return Err("Invalid flags: duplicate 'i'".to_string());
                    }
                    parsed.ignore_case = true;
                }
                'm' => {
                    if parsed.multiline {
                        return Err("Invalid flags: duplicate 'm'".to_string());
                    }
                    parsed.multiline = true;
                }
                _ => {
                    return Err(format!("Invalid flag: '{}'", ch));
                }
            }
        }
        Ok(parsed)
    }
}

/// One match found by [`CompiledPattern::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset of the start of the full match within the subject
    pub index: usize,
    /// Byte offset just past the end of the full match
    pub end: usize,
    /// Per-subpattern byte ranges; `None` for groups that did not
    /// participate in the match
    pub captures: Vec<Option<(usize, usize)>>,
}

impl PatternMatch {
    /// Slice the full matched text out of `subject`.
    pub fn matched_text<'a>(&self, subject: &'a str) -> &'a str {
        &subject[self.index..self.end]
    }

    /// Slice subpattern `i` (zero-based) out of `subject`.
    pub fn capture_text<'a>(&self, subject: &'a str, i: usize) -> Option<&'a str> {
        let (start, end) = self.captures.get(i).copied().flatten()?;
        Some(&subject[start..end])
    }
}

/// A compiled pattern, immutable after construction.
///
/// Construction may fail; failure is carried in the value rather than a
/// partially-usable object, and an invalid pattern simply never matches.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    flags: PatternFlags,
    compiled: Option<Regex>,
    subpattern_count: usize,
    error: Option<String>,
}

impl CompiledPattern {
    /// Compile `source` with the given flag string.
    ///
    /// Never panics and never returns an error: inspect [`is_valid`] /
    /// [`error_message`] on the result.
    ///
    /// [`is_valid`]: CompiledPattern::is_valid
    /// [`error_message`]: CompiledPattern::error_message
    pub fn compile(source: &str, flags: &str) -> Self {
        let flags = match PatternFlags::parse(flags) {
            Ok(flags) => flags,
            Err(message) => {
                return Self::invalid(source, PatternFlags::default(), message);
            }
        };

        let mut builder = RegexBuilder::new(source);
        builder.case_insensitive(flags.ignore_case);
        builder.multi_line(flags.multiline);
        // Always use unicode mode for proper UTF-8 handling.
        builder.unicode(true);

        match builder.build() {
            Ok(regex) => {
                let subpattern_count = regex.captures_len() - 1;
                CompiledPattern {
                    source: source.to_string(),
                    flags,
                    compiled: Some(regex),
                    subpattern_count,
                    error: None,
                }
            }
            Err(e) => Self::invalid(
                source,
                flags,
                format!("Invalid regular expression: {}", e),
            ),
        }
    }

    fn invalid(source: &str, flags: PatternFlags, message: String) -> Self {
        CompiledPattern {
            source: source.to_string(),
            flags,
            compiled: None,
            subpattern_count: 0,
            error: Some(message),
        }
    }

    /// Whether compilation succeeded.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The compile failure message, if compilation failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The original pattern text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Number of capturing subpatterns in the compiled form (0 when
    /// invalid).
    pub fn subpattern_count(&self) -> usize {
        self.subpattern_count
    }

    /// Search `subject` from `start_offset` for the first match.
    ///
    /// A `start_offset` beyond the end of the subject returns `None` rather
    /// than erroring, as do invalid patterns. The `global` flag does not
    /// change the result here; looping over successive matches is the
    /// caller's concern.
    pub fn find(&self, subject: &str, start_offset: usize) -> Option<PatternMatch> {
        let regex = self.compiled.as_ref()?;
        if start_offset > subject.len() {
            return None;
        }

        let caps = regex.captures_at(subject, start_offset)?;
        let full = caps.get(0)?;
        let captures = (1..caps.len())
            .map(|i| caps.get(i).map(|m| (m.start(), m.end())))
            .collect();

        Some(PatternMatch {
            index: full.start(),
            end: full.end(),
            captures,
        })
    }
}
