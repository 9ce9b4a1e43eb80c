use std::convert::TryFrom;
use std::fmt;

use crate::memory::Memory;
use crate::verb::Verb;
use crate::word::{Number, Word};

/// Why a run stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExitCode {
    Halted,          // HALT was executed, or RET found an empty stack
    EmptyStack,      // POP with nothing on the stack
    BadJump,         // Jump target outside the heap address range
    BadMemoryAccess, // RMEM/WMEM address outside the heap address range
    InvalidOpcode,   // Opcode was not recognized
    InvalidWord,     // Operand above the register window
    DivisionByZero,  // MOD with a zero divisor
    OutOfInput,      // IN with the input stream exhausted
    BadOutput,       // OUT with a value above the byte range
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ExitCode::Halted => "Halted",
            ExitCode::EmptyStack => "Attempted to pop from an empty stack",
            ExitCode::BadJump => "Jump target was outside the heap address range",
            ExitCode::BadMemoryAccess => "Memory access was outside the heap address range",
            ExitCode::InvalidOpcode => "Opcode was not recognized",
            ExitCode::InvalidWord => "Operand was above the register window",
            ExitCode::DivisionByZero => "Attempted modulo by zero",
            ExitCode::OutOfInput => "Input stream was exhausted during IN",
            ExitCode::BadOutput => "Attempted to output a value above the byte range",
        })
    }
}

/// Read only snapshot of the execution state, handed to hooks.
pub struct ExecutionState<'a> {
    pub instruction_ptr: Number,
    pub registers: &'a [Word],
    pub heap: &'a [Word],
    pub stack: &'a [Word],
}

/// A state change requested by a pre execute hook.
///
/// Hooks observe through a read only view; mutation travels back through
/// these values and is applied before the next fetch.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Patch {
    Register(usize, Word),
    Heap(Number, Word),
}

/// The processor's window on the outside world: guest I/O plus the pre and
/// post execute instrumentation hooks.
pub trait Host {
    fn pre_exec(&mut self, _state: &ExecutionState) -> Vec<Patch> {
        Vec::new()
    }

    fn post_exec(&mut self, _state: &ExecutionState, _running: bool) {}

    /// Next byte of guest input, or `None` once the stream is exhausted.
    fn input(&mut self) -> Option<u8>;

    fn output(&mut self, byte: u8);
}

pub struct Cpu<'m> {
    memory: &'m mut Memory,
    instruction_ptr: Number,
}

impl<'m> Cpu<'m> {
    pub fn new(memory: &'m mut Memory) -> Cpu<'m> {
        Cpu {
            memory,
            instruction_ptr: Number::ZERO,
        }
    }

    pub fn instruction_ptr(&self) -> Number {
        self.instruction_ptr
    }

    pub fn run<H: Host>(&mut self, host: &mut H) -> ExitCode {
        self.instruction_ptr = Number::ZERO;

        loop {
            if let Some(exit_code) = self.step(host) {
                return exit_code;
            }
        }
    }

    /// Executes one instruction; `None` while the guest keeps running.
    pub fn step<H: Host>(&mut self, host: &mut H) -> Option<ExitCode> {
        let patches = host.pre_exec(&state(self.memory, self.instruction_ptr));
        for patch in patches {
            self.apply(patch);
        }

        let result = self.tick(host);
        host.post_exec(&state(self.memory, self.instruction_ptr), result.is_ok());
        result.err()
    }

    fn apply(&mut self, patch: Patch) {
        match patch {
            Patch::Register(index, value) => self.memory.set_register(index, value),
            Patch::Heap(addr, value) => self.memory.write(addr, value),
        }
    }

    fn tick<H: Host>(&mut self, host: &mut H) -> Result<(), ExitCode> {
        let opcode = self.fetch();
        let verb = match Verb::decode(opcode.to_u16()) {
            Some(verb) => verb,
            None => return Err(ExitCode::InvalidOpcode),
        };

        match verb {
            Verb::HALT => Err(ExitCode::Halted),

            Verb::SET => {
                let a = self.fetch();
                let b = self.operand()?;
                self.write(a, b)
            }

            Verb::PUSH => {
                let a = self.operand()?;
                self.memory.push(a);
                Ok(())
            }

            Verb::POP => {
                let a = self.fetch();
                match self.memory.pop() {
                    Some(value) => self.write(a, value),
                    None => Err(ExitCode::EmptyStack),
                }
            }

            Verb::EQ => {
                let (a, b, c) = self.ternary()?;
                self.set_if(a, b == c)
            }

            Verb::GT => {
                let (a, b, c) = self.ternary()?;
                self.set_if(a, b > c)
            }

            Verb::JMP => {
                let target = self.operand()?;
                self.jump(target)
            }

            Verb::JT => {
                let a = self.operand()?;
                let target = self.operand()?;
                if a != Word::ZERO {
                    self.jump(target)
                } else {
                    Ok(())
                }
            }

            Verb::JF => {
                let a = self.operand()?;
                let target = self.operand()?;
                if a == Word::ZERO {
                    self.jump(target)
                } else {
                    Ok(())
                }
            }

            Verb::ADD => {
                let (a, b, c) = self.ternary()?;
                self.write(a, Word::modular(b.to_u32() + c.to_u32()))
            }

            Verb::MULT => {
                let (a, b, c) = self.ternary()?;
                self.write(a, Word::modular(b.to_u32() * c.to_u32()))
            }

            Verb::MOD => {
                let (a, b, c) = self.ternary()?;
                if c == Word::ZERO {
                    return Err(ExitCode::DivisionByZero);
                }
                self.write(a, Word::modular(b.to_u32() % c.to_u32()))
            }

            Verb::AND => {
                let (a, b, c) = self.ternary()?;
                self.write(a, Word::modular((b & c).to_u32()))
            }

            Verb::OR => {
                let (a, b, c) = self.ternary()?;
                self.write(a, Word::modular((b | c).to_u32()))
            }

            Verb::NOT => {
                let a = self.fetch();
                let b = self.operand()?;
                self.write(a, b.invert())
            }

            Verb::RMEM => {
                let a = self.fetch();
                let b = self.operand()?;
                let addr = Number::try_from(b).map_err(|_| ExitCode::BadMemoryAccess)?;
                let value = self.memory.read(addr);
                self.write(a, value)
            }

            Verb::WMEM => {
                let a = self.operand()?;
                let b = self.operand()?;
                let addr = Number::try_from(a).map_err(|_| ExitCode::BadMemoryAccess)?;
                self.memory.write(addr, b);
                Ok(())
            }

            Verb::CALL => {
                let target = self.operand()?;
                self.memory.push(Word::from(self.instruction_ptr));
                self.jump(target)
            }

            Verb::RET => match self.memory.pop() {
                None => Err(ExitCode::Halted),
                Some(target) => self.jump(target),
            },

            Verb::OUT => {
                let a = self.operand()?;
                if a.to_u16() > 0xff {
                    return Err(ExitCode::BadOutput);
                }
                host.output(a.to_u16() as u8);
                Ok(())
            }

            Verb::IN => {
                let a = self.fetch();
                match host.input() {
                    Some(byte) => self.write(a, Word::from(byte)),
                    None => Err(ExitCode::OutOfInput),
                }
            }

            Verb::NOOP => Ok(()),
        }
    }

    /// Reads the word under the instruction pointer and advances it.
    fn fetch(&mut self) -> Word {
        let word = self.memory.read(self.instruction_ptr);
        self.instruction_ptr = self.instruction_ptr + 1;
        word
    }

    /// Fetches an operand and resolves it to a value: literals are their own
    /// value, register codes dereference the register file.
    fn operand(&mut self) -> Result<Word, ExitCode> {
        let word = self.fetch();
        if word.register_index().is_some() {
            self.memory.resolve(word).map_err(|_| ExitCode::InvalidWord)
        } else if Number::try_from(word).is_ok() {
            Ok(word)
        } else {
            Err(ExitCode::InvalidWord)
        }
    }

    fn ternary(&mut self) -> Result<(Word, Word, Word), ExitCode> {
        let a = self.fetch();
        let b = self.operand()?;
        let c = self.operand()?;
        Ok((a, b, c))
    }

    fn write(&mut self, dest: Word, value: Word) -> Result<(), ExitCode> {
        let slot = self
            .memory
            .resolve_mut(dest)
            .map_err(|_| ExitCode::InvalidWord)?;
        *slot = value;
        Ok(())
    }

    fn set_if(&mut self, dest: Word, condition: bool) -> Result<(), ExitCode> {
        self.write(dest, if condition { Word::new(1) } else { Word::ZERO })
    }

    fn jump(&mut self, target: Word) -> Result<(), ExitCode> {
        self.instruction_ptr = Number::try_from(target).map_err(|_| ExitCode::BadJump)?;
        Ok(())
    }
}

fn state(memory: &Memory, instruction_ptr: Number) -> ExecutionState {
    ExecutionState {
        instruction_ptr,
        registers: memory.registers(),
        heap: memory.heap(),
        stack: memory.stack(),
    }
}
