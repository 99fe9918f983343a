//! Run options of the interpreter.

use crate::stack::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Print `L<n>: ignoring text: ...` when a line carries more than its instruction needs.
    pub warn_ignored_text: bool,
    /// Let comment lines advance the line counter.
    pub count_comment_lines: bool,
    /// Mode the stack starts in.
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            warn_ignored_text: true,
            count_comment_lines: false,
            mode: Mode::Stack,
        }
    }
}
