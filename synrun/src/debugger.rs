use std::collections::{BTreeSet, VecDeque};
use std::io::{BufRead, Write};
use std::str::FromStr;

use synvm::{
    constants, peek_instruction, Coverage, ExecutionState, Host, Observer, Patch, Tracer, Verb,
    Word,
};

use crate::read_console_line;

/// The `vmctl` command preprocessor.
///
/// Sits between the console and the guest: console lines starting with `!`
/// are debugger commands, lines starting with `!!` are literal guest input
/// with one `!` stripped, everything else is queued for the guest byte by
/// byte with its newline preserved.
///
/// On every pre execute hook the debugger decides whether to prompt: always
/// before the first instruction, at address and instruction breakpoints,
/// when the scheduled step budget runs out, and whenever the guest is about
/// to read input the queue cannot serve.
pub struct Debugger<R: BufRead, W: Write> {
    console: R,
    output: W,
    queue: VecDeque<u8>,
    /// Remaining free-running steps; negative means unbounded.
    sleep: i64,
    addr_breakpoints: BTreeSet<u16>,
    instr_breakpoints: BTreeSet<u16>,
    coverage: Option<Coverage>,
    tracer: Option<Tracer>,
    first_instruction: bool,
    patches: Vec<Patch>,
}

impl<R: BufRead, W: Write> Debugger<R, W> {
    pub fn new(console: R, output: W) -> Debugger<R, W> {
        Debugger {
            console,
            output,
            queue: VecDeque::new(),
            sleep: 0,
            addr_breakpoints: BTreeSet::new(),
            instr_breakpoints: BTreeSet::new(),
            coverage: None,
            tracer: None,
            first_instruction: true,
            patches: Vec::new(),
        }
    }

    pub fn coverage(&self) -> Option<&Coverage> {
        self.coverage.as_ref()
    }

    pub fn guest_output(&self) -> &W {
        &self.output
    }

    fn prompt(&mut self, state: &ExecutionState) {
        let ip = state.instruction_ptr.to_usize();
        let opcode = state.heap[ip].to_u16();
        let is_in = opcode == Verb::IN.opcode();

        let addr_breakpoint = self.addr_breakpoints.contains(&(ip as u16));
        let instr_breakpoint = self.instr_breakpoints.contains(&opcode);
        let free_running = self.sleep != 0 && !addr_breakpoint && !instr_breakpoint;

        // A pending IN is about to consume one queued byte; stay free
        // running only while the queue still holds input after that.
        let remaining = if is_in {
            self.queue.len().saturating_sub(1)
        } else {
            self.queue.len()
        };

        if free_running && (!is_in || remaining > 0) {
            return;
        }

        if self.first_instruction {
            eprintln!("This is your chance to pre-populate the input.");
            eprintln!("Use !help for help and !cont to continue running the VM");
            self.first_instruction = false;
        } else if addr_breakpoint {
            eprintln!("\nStopped at breakpoint {:04x}", ip);
        } else if instr_breakpoint {
            let name = Verb::decode(opcode).map(Verb::mnemonic).unwrap_or("???");
            eprintln!("\nStopped at instruction {}", name);
        }

        loop {
            let line = match read_console_line(&mut self.console) {
                // Console closed: leave the queue as it is; a pending IN
                // with nothing queued then ends the run.
                None => return,
                Some(line) => line,
            };

            let (is_command, text) = if line.starts_with("!!") {
                (false, &line[1..])
            } else if line.starts_with('!') {
                (true, &line[..])
            } else {
                (false, &line[..])
            };

            if !is_command {
                self.queue.extend(text.bytes());
                self.queue.push_back(b'\n');
                return;
            }

            let resume = self.command(text, state);
            if resume && (!is_in || remaining > 0) {
                return;
            }
        }
    }

    /// Runs one `!` command. Returns true when control should go back to
    /// the processor.
    fn command(&mut self, line: &str, state: &ExecutionState) -> bool {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or("");

        let result: Result<bool, String> = match verb {
            "!help" => {
                self.help();
                Ok(false)
            }

            "!peek" => {
                eprint!("{}", peek_instruction(state));
                Ok(false)
            }

            "!cont" => {
                self.sleep = -1;
                Ok(true)
            }

            "!step" => {
                self.sleep = 1;
                Ok(true)
            }

            "!skip" => argument(&mut parts).and_then(|text| {
                let count = parse_int(text)?;
                self.sleep = i64::from(count);
                Ok(true)
            }),

            "!setr" => argument(&mut parts).and_then(|register| {
                let register = parse_int(register)? as usize;
                let value = parse_int(argument(&mut parts)?)?;
                if register >= constants::REGISTER_COUNT {
                    return Err(format!("no such register: r{}", register));
                }
                if value >= u32::from(constants::REGISTER_BASE) {
                    return Err(format!("value {:#x} is out of range", value));
                }
                self.patches
                    .push(Patch::Register(register, Word::new(value as u16)));
                eprintln!("r{} = {:#06x}", register, value);
                Ok(false)
            }),

            "!abreak" => argument(&mut parts).and_then(|text| {
                let addr = parse_int(text)?;
                if addr as usize >= constants::HEAP_SIZE {
                    return Err("cannot set debug point outside memory range".to_owned());
                }
                let addr = addr as u16;
                if self.addr_breakpoints.remove(&addr) {
                    eprintln!("Removed breakpoint at {:#06x}", addr);
                } else {
                    self.addr_breakpoints.insert(addr);
                    eprintln!("Added breakpoint at {:#06x}", addr);
                }
                Ok(false)
            }),

            "!ibreak" => argument(&mut parts).and_then(|text| {
                let verb = Verb::from_str(text).map_err(|err| err.to_string())?;
                let opcode = verb.opcode();
                if self.instr_breakpoints.remove(&opcode) {
                    eprintln!("Removed breakpoint on {}", verb);
                } else {
                    self.instr_breakpoints.insert(opcode);
                    eprintln!("Added breakpoint on {}", verb);
                }
                Ok(false)
            }),

            "!instr" => {
                if self.tracer.take().is_some() {
                    eprintln!("Disabled instruction tracing");
                } else {
                    self.tracer = Some(Tracer);
                    eprintln!("Enabled instruction tracing");
                }
                Ok(false)
            }

            "!cov" => {
                if self.coverage.take().is_some() {
                    eprintln!("Disabled coverage tracking");
                } else {
                    self.coverage = Some(Coverage::new());
                    eprintln!("Enabled coverage tracking");
                }
                Ok(false)
            }

            "!exit" => {
                self.patches.push(Patch::Heap(
                    state.instruction_ptr,
                    Word::new(Verb::HALT.opcode()),
                ));
                Ok(true)
            }

            _ => Err(format!("unknown command {}", verb)),
        };

        match result {
            Ok(resume) => resume,
            Err(message) => {
                eprintln!("Failed to execute command '{}': {}", line, message);
                false
            }
        }
    }

    fn help(&self) {
        eprintln!("Debugger commands:");
        eprintln!("  !setr <reg> <value>  set a register");
        eprintln!("  !skip <n>            run n instructions, then stop");
        eprintln!("  !step                run one instruction, then stop");
        eprintln!("  !abreak <addr>       toggle a breakpoint on an address");
        eprintln!("  !ibreak <verb>       toggle a breakpoint on a mnemonic");
        eprintln!("  !peek                show the next instruction");
        eprintln!("  !instr               toggle instruction tracing");
        eprintln!("  !cov                 toggle coverage tracking");
        eprintln!("  !exit                overwrite the next instruction with halt");
        eprintln!("  !cont                resume the VM");
        eprintln!("  !help                show this help");
        eprintln!("Numbers accept 0x, 0b and leading-0 octal prefixes.");
        eprintln!("Any other line is fed to the guest; start it with !! for a literal !.");
    }
}

impl<R: BufRead, W: Write> Host for Debugger<R, W> {
    fn pre_exec(&mut self, state: &ExecutionState) -> Vec<Patch> {
        if let Some(tracer) = &mut self.tracer {
            tracer.observe(state);
        }
        if let Some(coverage) = &mut self.coverage {
            coverage.observe(state);
        }

        self.prompt(state);

        // Deferred decrement: the step that was just granted counts, so
        // `!step` runs exactly one instruction before the next stop.
        self.sleep = if self.sleep < 0 { self.sleep } else { self.sleep - 1 };

        std::mem::take(&mut self.patches)
    }

    fn input(&mut self) -> Option<u8> {
        self.queue.pop_front()
    }

    fn output(&mut self, byte: u8) {
        let _ = self.output.write_all(&[byte]);
        let _ = self.output.flush();
    }
}

fn argument<'a, I: Iterator<Item = &'a str>>(parts: &mut I) -> Result<&'a str, String> {
    parts.next().ok_or_else(|| "missing argument".to_owned())
}

/// Parses an integer with the prompt's prefix conventions: `0x` hex, `0b`
/// binary, a leading `0` octal, decimal otherwise.
pub(crate) fn parse_int(text: &str) -> Result<u32, String> {
    let (digits, radix) = if let Some(hex) = text.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b") {
        (bin, 2)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    u32::from_str_radix(digits, radix).map_err(|err| err.to_string())
}
