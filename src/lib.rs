//! Monty is a line-oriented interpreter for a small stack bytecode.
//!
//! # Example
//!
//! ```text
//! # prints "Hi" then the sum of 5 and 3
//! push 0
//! push 105
//! push 72
//! pstr
//!
//! push 5
//! push 3
//! add
//! pint
//! ```
//!
//! # Instructions
//!
//! | Instruction | Usage         | Brief   |
//! |-------------|---------------|---------|
//! | Push        | push _number_ | Push `number` on top of the stack. |
//! | Pall        | pall          | Print every value of the stack, top first, one per line. |
//! | Pint        | pint          | Print the value on top of the stack. |
//! | Pop         | pop           | Remove the value on top of the stack. |
//! | Swap        | swap          | Swap the top two values. |
//! | Add         | add           | Pop the top value and add it to the new top. |
//! | Sub         | sub           | Pop the top value and subtract it from the new top. |
//! | Mul         | mul           | Pop the top value and multiply the new top by it. |
//! | Div         | div           | Pop the top value and divide the new top by it, truncating toward zero. |
//! | Mod         | mod           | Pop the top value and replace the new top with the remainder of the division by it. |
//! | Nop         | nop           | Do nothing. |
//! | Pchar       | pchar         | Print the top value as an ASCII character and pop it. |
//! | Pstr        | pstr          | Print values as ASCII characters from the top down to the first `0` or non-ASCII value. |
//! | Rotl        | rotl          | The top value becomes the last one. |
//! | Rotr        | rotr          | The last value becomes the top one. |
//! | Stack       | stack         | `push` inserts on top (default). |
//! | Queue       | queue         | `push` inserts at the bottom. |
//!
//! # Important notes
//!
//! - Each instruction is separated with newline.
//! - Lines whose first non-blank character is `#` are comments.
//! - Blank lines and comments are not counted in `L<n>` line numbers.
//! - Text after what an instruction needs is reported as `L<n>: ignoring text: ...` and skipped.
//! - The first error stops the program.

pub mod bytecode;
pub mod config;
pub mod error;
mod lexer;
pub mod stack;
pub mod token;
pub mod vm;

pub use config::Config;
pub use error::{Error, Result};
pub use vm::Vm;
