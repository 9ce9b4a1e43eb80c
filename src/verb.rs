use std::error::Error;
use std::fmt;
use std::str::FromStr;

use num::traits::ToPrimitive;
use num::FromPrimitive;
use num_derive::{FromPrimitive, ToPrimitive};

/// Processor instruction set.
///
/// Every instruction is one opcode word followed by zero to three operand
/// words. Operand words below `0x8000` are literal values, words in the
/// register window are read (or written) through the register file.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Verb {
    //  Mnemonic | Operands | Effect
    //-----------+----------+--------------------------------------------------
    HALT, // | -        | Stops execution
    SET,  // | a b      | a = b
    PUSH, // | a        | Pushes a onto the stack
    POP,  // | a        | a = popped value; empty stack is an error
    EQ,   // | a b c    | a = (b == c) ? 1 : 0
    GT,   // | a b c    | a = (b > c) ? 1 : 0
    JMP,  // | a        | ip = a
    JT,   // | a b      | ip = b if a is nonzero
    JF,   // | a b      | ip = b if a is zero
    ADD,  // | a b c    | a = (b + c) mod 0x8000
    MULT, // | a b c    | a = (b * c) mod 0x8000
    MOD,  // | a b c    | a = b mod c; zero divisor is an error
    AND,  // | a b c    | a = b & c
    OR,   // | a b c    | a = b | c
    NOT,  // | a b      | a = 15 bit inverse of b
    RMEM, // | a b      | a = heap[b]
    WMEM, // | a b      | heap[a] = b
    CALL, // | a        | Pushes ip, then ip = a
    RET,  // | -        | ip = popped value; empty stack halts
    OUT,  // | a        | Writes byte a to the output stream
    IN,   // | a        | a = next byte of the input stream
    NOOP, // | -        | Does nothing
}

/// Error produced when a string does not name one of the 22 instructions.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnknownMnemonic {
    pub text: String,
}

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" is not an instruction mnemonic", self.text)
    }
}

impl Error for UnknownMnemonic {}

/// What an instruction slot accepts in assembly source.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operand {
    /// The slot writes a result and must name a register.
    Register,
    /// The slot may hold any word: number, character, register or tag.
    Value,
}

impl Verb {
    pub fn decode(opcode: u16) -> Option<Verb> {
        FromPrimitive::from_u16(opcode)
    }

    pub fn opcode(self) -> u16 {
        self.to_u16().unwrap()
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Verb::HALT => "halt",
            Verb::SET => "set",
            Verb::PUSH => "push",
            Verb::POP => "pop",
            Verb::EQ => "eq",
            Verb::GT => "gt",
            Verb::JMP => "jmp",
            Verb::JT => "jt",
            Verb::JF => "jf",
            Verb::ADD => "add",
            Verb::MULT => "mult",
            Verb::MOD => "mod",
            Verb::AND => "and",
            Verb::OR => "or",
            Verb::NOT => "not",
            Verb::RMEM => "rmem",
            Verb::WMEM => "wmem",
            Verb::CALL => "call",
            Verb::RET => "ret",
            Verb::OUT => "out",
            Verb::IN => "in",
            Verb::NOOP => "noop",
        }
    }

    /// Per slot operand signature, destination slots first where present.
    ///
    /// # Examples
    /// ```
    /// use synvm::{Operand, Verb};
    ///
    /// assert_eq!(Verb::HALT.operands(), &[]);
    /// assert_eq!(Verb::SET.operands(), &[Operand::Register, Operand::Value]);
    /// assert_eq!(Verb::EQ.argument_count(), 3);
    /// ```
    pub fn operands(self) -> &'static [Operand] {
        use self::Operand::{Register, Value};

        match self {
            Verb::HALT | Verb::RET | Verb::NOOP => &[],
            Verb::SET => &[Register, Value],
            Verb::PUSH => &[Value],
            Verb::POP => &[Register],
            Verb::EQ | Verb::GT => &[Register, Value, Value],
            Verb::JMP | Verb::CALL | Verb::OUT => &[Value],
            Verb::JT | Verb::JF => &[Value, Value],
            Verb::ADD | Verb::MULT | Verb::MOD | Verb::AND | Verb::OR => {
                &[Register, Value, Value]
            }
            Verb::NOT | Verb::RMEM => &[Register, Value],
            Verb::WMEM => &[Value, Value],
            Verb::IN => &[Register],
        }
    }

    pub fn argument_count(self) -> usize {
        self.operands().len()
    }
}

impl FromStr for Verb {
    type Err = UnknownMnemonic;

    /// Mnemonics are the lowercase keywords of the assembly language.
    ///
    /// # Examples
    /// ```
    /// use synvm::Verb;
    ///
    /// assert_eq!("halt".parse(), Ok(Verb::HALT));
    /// assert!("HALT".parse::<Verb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Verb, UnknownMnemonic> {
        match s {
            "halt" => Ok(Verb::HALT),
            "set" => Ok(Verb::SET),
            "push" => Ok(Verb::PUSH),
            "pop" => Ok(Verb::POP),
            "eq" => Ok(Verb::EQ),
            "gt" => Ok(Verb::GT),
            "jmp" => Ok(Verb::JMP),
            "jt" => Ok(Verb::JT),
            "jf" => Ok(Verb::JF),
            "add" => Ok(Verb::ADD),
            "mult" => Ok(Verb::MULT),
            "mod" => Ok(Verb::MOD),
            "and" => Ok(Verb::AND),
            "or" => Ok(Verb::OR),
            "not" => Ok(Verb::NOT),
            "rmem" => Ok(Verb::RMEM),
            "wmem" => Ok(Verb::WMEM),
            "call" => Ok(Verb::CALL),
            "ret" => Ok(Verb::RET),
            "out" => Ok(Verb::OUT),
            "in" => Ok(Verb::IN),
            "noop" => Ok(Verb::NOOP),
            _ => Err(UnknownMnemonic { text: s.to_owned() }),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
