use std::fmt;
use std::rc::Rc;

use byteorder::ByteOrder;
use synvm::Verb;
use util::Endian;

/// Grammar symbols: the token kinds produced by the tokenizer plus the
/// non-terminals the parser expands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Symbol {
    // Non-terminals
    Start,
    P,
    T,
    I,
    D,
    W,
    R,

    // Terminals
    End,
    NumberLiteral,
    CharacterLiteral,
    StringLiteral,
    Register,
    TagDecl,
    TagRef,
    Verb,
    Eol,

    // Transient symbols used while scanning
    None,
    UnknownIdentifier,
    Error,
}

impl Symbol {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Symbol::End
                | Symbol::NumberLiteral
                | Symbol::CharacterLiteral
                | Symbol::StringLiteral
                | Symbol::Register
                | Symbol::TagDecl
                | Symbol::TagRef
                | Symbol::Verb
                | Symbol::Eol
        )
    }
}

/// Source position of a token's first character.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Location {
    pub file: Rc<str>,
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(file: &Rc<str>, row: usize, col: usize) -> Location {
        Location {
            file: Rc::clone(file),
            row,
            col,
        }
    }
}

impl Default for Location {
    fn default() -> Location {
        Location {
            file: Rc::from(""),
            row: 0,
            col: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row, self.col)
    }
}

/// A token: a symbol, an opaque payload and where it came from.
///
/// The payload layout matches what the code generator emits verbatim.
/// Numbers, characters, registers and verbs hold one little endian word;
/// text payloads (strings, tags, error messages) hold one word per
/// character, each the character in the low byte and a zero high byte.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub symbol: Symbol,
    pub data: Vec<u8>,
    pub location: Location,
}

impl Token {
    pub fn new(symbol: Symbol, data: Vec<u8>, location: Location) -> Token {
        Token {
            symbol,
            data,
            location,
        }
    }

    /// A payload-less token with a placeholder location, as pushed on the
    /// parser's prediction stack.
    pub fn bare(symbol: Symbol) -> Token {
        Token {
            symbol,
            data: Vec::new(),
            location: Location::default(),
        }
    }

    pub fn number_payload(value: u16) -> Vec<u8> {
        let mut data = vec![0; 2];
        Endian::write_u16(&mut data, value);
        data
    }

    pub fn text_payload(text: &str) -> Vec<u8> {
        let mut data = Vec::with_capacity(2 * text.len());
        for byte in text.bytes() {
            data.push(byte);
            data.push(0);
        }
        data
    }

    pub fn as_number(&self) -> u16 {
        let mut value = 0u16;
        if !self.data.is_empty() {
            value = u16::from(self.data[0]);
        }
        if self.data.len() > 1 {
            value |= u16::from(self.data[1]) << 8;
        }
        value
    }

    pub fn as_char(&self) -> char {
        (self.as_number() as u8) as char
    }

    pub fn as_str(&self) -> String {
        self.data.iter().step_by(2).map(|&b| b as char).collect()
    }

    pub fn as_verb(&self) -> Option<Verb> {
        Verb::decode(self.as_number())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.symbol {
            // Non-terminals
            Symbol::Start => f.write_str("<Start>"),
            Symbol::P => f.write_str("<P>"),
            Symbol::T => f.write_str("<T>"),
            Symbol::I => f.write_str("<I>"),
            Symbol::D => f.write_str("<D>"),
            Symbol::W => f.write_str("<W>"),
            Symbol::R => f.write_str("<R>"),
            // Terminals
            Symbol::End => f.write_str("<END>"),
            Symbol::NumberLiteral => write!(f, "<NUMBER {}>", self.as_number()),
            Symbol::CharacterLiteral => write!(f, "<CHARACTER {}>", self.as_char()),
            Symbol::StringLiteral => write!(f, "<STRING {}>", self.as_str()),
            Symbol::Register => write!(
                f,
                "<REGISTER {}>",
                if self.data.is_empty() {
                    -1
                } else {
                    i32::from(self.data[0])
                }
            ),
            Symbol::TagDecl => write!(f, "<TAG_DECL {}>", self.as_str()),
            Symbol::TagRef => write!(f, "<TAG_REF {}>", self.as_str()),
            Symbol::Verb => match self.as_verb() {
                Some(verb) => write!(f, "<VERB {}>", verb),
                None => f.write_str("<VERB ?>"),
            },
            Symbol::Eol => f.write_str("<EOL>"),
            // Transients
            Symbol::None => f.write_str("{NONE}"),
            Symbol::UnknownIdentifier => write!(f, "<UNKNOWN_IDENTIFIER {}>", self.as_str()),
            Symbol::Error => write!(f, "<ERROR {}>", self.as_str()),
        }
    }
}
