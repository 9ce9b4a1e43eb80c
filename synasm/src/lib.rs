//! Assembler for the [synvm](../synvm/index.html) virtual machine.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which takes a
//! program written in Synacor assembly and returns the bytecode image
//! together with any warnings. The pipeline underneath is exposed too:
//! [`tokenize`](fn.tokenize.html) turns source text into a token stream,
//! [`parse`](fn.parse.html) builds the parse tree, and
//! [`generate`](fn.generate.html) flattens the tree into bytecode and
//! resolves tag references.
//!
//! # Synacor Assembly Language
//!
//! A program is a sequence of lines; a newline ends a statement. Each line
//! is one of three things: an instruction (a verb with its operands), a tag
//! declaration, or a bare data sequence whose literals are emitted verbatim.
//!
//! ## Instructions
//!
//! One mnemonic per opcode. Operand slots written `a` accept any word
//! (number, character, register or tag); slots written `r` must name a
//! register.
//!
//! Mnemonic | Syntax         | Effect
//! ---------|----------------|---------------------------------------------
//! `halt`   | `halt`         | Stops execution
//! `set`    | `set r a`      | `r = a`
//! `push`   | `push a`       | Pushes `a` onto the stack
//! `pop`    | `pop r`        | Pops into `r`; the stack must not be empty
//! `eq`     | `eq r a b`     | `r = (a == b) ? 1 : 0`
//! `gt`     | `gt r a b`     | `r = (a > b) ? 1 : 0`
//! `jmp`    | `jmp a`        | Jumps to address `a`
//! `jt`     | `jt a b`       | Jumps to `b` if `a` is nonzero
//! `jf`     | `jf a b`       | Jumps to `b` if `a` is zero
//! `add`    | `add r a b`    | `r = (a + b) mod 0x8000`
//! `mult`   | `mult r a b`   | `r = (a * b) mod 0x8000`
//! `mod`    | `mod r a b`    | `r = a mod b`
//! `and`    | `and r a b`    | `r = a & b`
//! `or`     | `or r a b`     | `r = a \| b`
//! `not`    | `not r a`      | `r =` 15 bit inverse of `a`
//! `rmem`   | `rmem r a`     | `r = heap[a]`
//! `wmem`   | `wmem a b`     | `heap[a] = b`
//! `call`   | `call a`       | Pushes the return address, jumps to `a`
//! `ret`    | `ret`          | Pops an address and jumps to it
//! `out`    | `out a`        | Writes the character `a` to stdout
//! `in`     | `in r`         | Reads one byte from stdin into `r`
//! `noop`   | `noop`         | Does nothing
//!
//! ## Registers
//!
//! The eight registers are written `r0` through `r7`. In the emitted image
//! a register is the word `0x8000 + n`.
//!
//! ## Tags
//!
//! A tag declares a symbolic address: `name:` on its own line marks the
//! current word offset, and `name` anywhere a word is expected refers to
//! it. References may appear before the declaration; the code generator
//! back-patches them. Tag names consist of alphanumerics plus `-`, `_`,
//! `:` and `.`.
//!
//! ## Literals
//!
//! Numbers are unsigned 16 bit values. A leading `0` selects a prefixed
//! base: `0x` hexadecimal, `0b` binary, a bare leading zero octal. `_` may
//! separate digits. Character literals are written `'c'`, string literals
//! `"..."`; both accept the escapes `\0 \n \t \v \b \r \f \a \\ \' \"`.
//! A string emits one word per character.
//!
//! ## Example
//!
//! ```text
//!     set r0 greeting
//! loop:
//!     rmem r1 r0
//!     jf r1 done
//!     out r1
//!     add r0 r0 1
//!     jmp loop
//! done:
//!     halt
//!
//! greeting:
//!     "Hi" '\n' 0
//! ```

mod codegen;
mod error;
mod grammar;
mod parser;
mod tokenizer;


pub use crate::codegen::generate;
pub use crate::error::{Diagnostic, Error, Warning};
pub use crate::grammar::{Location, Symbol, Token};
pub use crate::parser::{parse, Node, NodeId, ParseTree};
pub use crate::tokenizer::tokenize;

pub type Result<T> = std::result::Result<T, Error>;

/// Collects the error tokens of a failed tokenizer run.
fn lexical_diagnostics(tokens: &[Token]) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|token| token.symbol == Symbol::Error)
        .map(|token| Diagnostic::new(token.location.clone(), token.as_str()))
        .collect()
}

/// Assembles a whole source file into a bytecode image.
///
/// `file` only labels diagnostics; the source itself comes from `source`.
///
/// # Examples
/// ```
/// let (bytecode, warnings) = synasm::assemble("hello.syn", "out 65\nhalt\n").unwrap();
///
/// assert_eq!(bytecode, vec![0x13, 0x00, 0x41, 0x00, 0x00, 0x00]);
/// assert!(warnings.is_empty());
/// ```
pub fn assemble(file: &str, source: &str) -> Result<(Vec<u8>, Vec<Warning>)> {
    let (tokens, ok) = tokenize(file, source);
    if !ok {
        return Err(Error::Lexical(lexical_diagnostics(&tokens)));
    }

    let tree = parse(&tokens)?;
    generate(&tree)
}
