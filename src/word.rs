use std::convert::TryFrom;
use std::fmt;
use std::ops;

use byteorder::ByteOrder;
use util::Endian;

use crate::constants;

/// A value in the unified 16 bit address space.
///
/// Words below `0x8000` are literal numbers or heap addresses, the eight
/// values starting at `0x8000` select a register, and everything above is
/// invalid and traps when the processor resolves it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Word(u16);

impl Word {
    pub const ZERO: Word = Word(0);

    pub fn new(value: u16) -> Word {
        Word(value)
    }

    /// Reduces an arithmetic result into the 15 bit value range.
    ///
    /// # Examples
    /// ```
    /// use synvm::Word;
    ///
    /// assert_eq!(Word::modular(0x7fff + 1), Word::ZERO);
    /// assert_eq!(Word::modular(0x8000 + 42), Word::new(42));
    /// ```
    pub fn modular(value: u32) -> Word {
        Word((value % constants::MODULO) as u16)
    }

    pub fn to_u16(self) -> u16 {
        self.0
    }

    pub fn to_u32(self) -> u32 {
        u32::from(self.0)
    }

    pub fn to_usize(self) -> usize {
        usize::from(self.0)
    }

    /// The register selected by this word, if it lies in the register window.
    ///
    /// # Examples
    /// ```
    /// use synvm::Word;
    ///
    /// assert_eq!(Word::new(0x8003).register_index(), Some(3));
    /// assert_eq!(Word::new(42).register_index(), None);
    /// assert_eq!(Word::new(0x8008).register_index(), None);
    /// ```
    pub fn register_index(self) -> Option<usize> {
        if self.0 >= constants::REGISTER_BASE && self.0 < constants::REGISTER_LIMIT {
            Some(usize::from(self.0 - constants::REGISTER_BASE))
        } else {
            None
        }
    }

    /// 15 bit logical inverse: flips every bit, then clears bit 15.
    ///
    /// # Examples
    /// ```
    /// use synvm::Word;
    ///
    /// assert_eq!(Word::ZERO.invert(), Word::new(0x7fff));
    /// assert_eq!(Word::new(0x7fff).invert(), Word::ZERO);
    /// ```
    pub fn invert(self) -> Word {
        Word(!self.0 & 0x7fff)
    }

    pub fn decode(bytes: &[u8]) -> Word {
        Word(Endian::read_u16(bytes))
    }

    pub fn encode(self, bytes: &mut [u8]) {
        Endian::write_u16(bytes, self.0)
    }
}

impl ops::BitAnd for Word {
    type Output = Word;

    fn bitand(self, rhs: Word) -> Word {
        Word(self.0 & rhs.0)
    }
}

impl ops::BitOr for Word {
    type Output = Word;

    fn bitor(self, rhs: Word) -> Word {
        Word(self.0 | rhs.0)
    }
}

impl From<Number> for Word {
    fn from(number: Number) -> Word {
        Word(number.0)
    }
}

impl From<u8> for Word {
    fn from(byte: u8) -> Word {
        Word(u16::from(byte))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Word({:#06x})", self.0)
    }
}

/// A 15 bit heap address. The instruction pointer has this type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Number(u16);

impl Number {
    pub const ZERO: Number = Number(0);

    /// Callers must stay below `0x8000`; breaking the bound is a programming
    /// error, not an input error.
    pub fn new(value: u16) -> Number {
        assert!(u32::from(value) < constants::MODULO);
        Number(value)
    }

    pub fn to_u16(self) -> u16 {
        self.0
    }

    pub fn to_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl ops::Add<u16> for Number {
    type Output = Number;

    /// Address arithmetic wraps at the heap boundary.
    ///
    /// # Examples
    /// ```
    /// use synvm::Number;
    ///
    /// assert_eq!(Number::new(0x7fff) + 1, Number::ZERO);
    /// ```
    fn add(self, rhs: u16) -> Number {
        Number(((u32::from(self.0) + u32::from(rhs)) % constants::MODULO) as u16)
    }
}

impl TryFrom<Word> for Number {
    type Error = ();

    fn try_from(word: Word) -> Result<Number, ()> {
        if word.to_u32() < constants::MODULO {
            Ok(Number(word.0))
        } else {
            Err(())
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Number({:#06x})", self.0)
    }
}
