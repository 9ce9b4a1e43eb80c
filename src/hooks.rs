use crate::constants;
use crate::cpu::ExecutionState;
use crate::verb::Verb;
use crate::word::Word;

/// A composable execution observer; the instrumentation side of the pre and
/// post execute hooks.
pub trait Observer {
    fn observe(&mut self, state: &ExecutionState);
}

/// Tracks which heap addresses were occupied by executed instructions.
pub struct Coverage {
    visited: Vec<bool>,
}

impl Coverage {
    pub fn new() -> Coverage {
        Coverage {
            visited: vec![false; constants::HEAP_SIZE],
        }
    }

    pub fn summary(&self) -> String {
        let count = self.visited.iter().filter(|&&visited| visited).count();
        format!(
            "\n-------------\nCovered {} addresses ({:.2} %)\n-------------\n",
            count,
            100.0 * count as f64 / constants::HEAP_SIZE as f64
        )
    }
}

impl Observer for Coverage {
    fn observe(&mut self, state: &ExecutionState) {
        let ip = state.instruction_ptr.to_usize();
        match Verb::decode(state.heap[ip].to_u16()) {
            None => eprintln!("UNKNOWN {:x}", state.heap[ip].to_u16()),
            Some(verb) => {
                let end = (ip + 1 + verb.argument_count()).min(self.visited.len());
                for cell in &mut self.visited[ip..end] {
                    *cell = true;
                }
            }
        }
    }
}

impl Default for Coverage {
    fn default() -> Coverage {
        Coverage::new()
    }
}

/// Prints every executed instruction to stderr.
pub struct Tracer;

impl Observer for Tracer {
    fn observe(&mut self, state: &ExecutionState) {
        eprint!("{}", peek_instruction(state));
    }
}

/// Renders a word the way a programmer reads operands: register names for
/// the register window, quoted characters for printable ASCII, hex otherwise.
pub fn format_word(word: Word) -> String {
    if let Some(register) = word.register_index() {
        return format!("r{}", register);
    }

    let value = word.to_u16();
    if value >= 0x20 && value <= 0x7e {
        return format!("'{}'", value as u8 as char);
    }

    format!("{:x}", value)
}

/// One line disassembly of the instruction under the instruction pointer,
/// followed by the register file.
pub fn peek_instruction(state: &ExecutionState) -> String {
    let ip = state.instruction_ptr.to_usize();

    let (name, argc) = match Verb::decode(state.heap[ip].to_u16()) {
        Some(verb) => (verb.mnemonic(), verb.argument_count()),
        None => ("???", 0),
    };

    let mut out = format!("0x{:04x} | {:<4}", ip, name);
    for offset in 0..argc {
        let operand = state.heap[(ip + 1 + offset) % constants::HEAP_SIZE];
        out.push_str(&format!(" {:>4}", format_word(operand)));
    }
    for _ in argc..3 {
        out.push_str("     ");
    }

    out.push_str(" |");
    for register in state.registers {
        out.push_str(&format!("  {:04x}", register.to_u16()));
    }
    out.push('\n');

    out
}
