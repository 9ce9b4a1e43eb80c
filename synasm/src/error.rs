use std::error::Error as StdError;
use std::fmt;

use crate::grammar::Location;

/// A located message, the unit of assembler diagnostics.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Diagnostic {
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn new(location: Location, message: String) -> Diagnostic {
        Diagnostic { location, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Non-fatal findings reported alongside a successful assembly.
pub type Warning = Diagnostic;

/// Everything that can end a compile: lexical errors collected across the
/// whole input, one syntax error, or one semantic error.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    Lexical(Vec<Diagnostic>),
    Syntax(Diagnostic),
    Semantic(Diagnostic),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Lexical(diagnostics) => {
                for (index, diagnostic) in diagnostics.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", diagnostic)?;
                }
                Ok(())
            }
            Error::Syntax(diagnostic) => write!(f, "{}", diagnostic),
            Error::Semantic(diagnostic) => write!(f, "{}", diagnostic),
        }
    }
}

impl StdError for Error {}
