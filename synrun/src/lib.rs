//! Host-side plumbing for running Synacor images: the plain terminal host,
//! the interactive debugger, and load-and-run helpers shared by the
//! `runvm` and `vmctl` binaries.

pub mod debugger;


use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use synvm::{Coverage, Cpu, ExecutionState, ExitCode, Host, Memory, Observer, Patch, Tracer};

pub use crate::debugger::Debugger;

#[derive(Debug)]
pub enum Error {
    Io(io::Error, PathBuf),
    Asm(synasm::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err, path) => write!(f, "Reading \"{}\" failed: {}", path.display(), err),
            Error::Asm(err) => {
                writeln!(f, "Assembling input failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

impl std::error::Error for Error {}

/// The plain host: guest input comes from stdin one line at a time and is
/// served byte by byte, guest output goes to stdout unbuffered. Coverage
/// and tracing observers can be attached.
pub struct Terminal {
    pending: VecDeque<u8>,
    coverage: Option<Coverage>,
    tracer: Option<Tracer>,
}

impl Terminal {
    pub fn new() -> Terminal {
        Terminal {
            pending: VecDeque::new(),
            coverage: None,
            tracer: None,
        }
    }

    pub fn with_observers(coverage: bool, trace: bool) -> Terminal {
        Terminal {
            pending: VecDeque::new(),
            coverage: if coverage { Some(Coverage::new()) } else { None },
            tracer: if trace { Some(Tracer) } else { None },
        }
    }

    pub fn coverage(&self) -> Option<&Coverage> {
        self.coverage.as_ref()
    }
}

impl Default for Terminal {
    fn default() -> Terminal {
        Terminal::new()
    }
}

impl Host for Terminal {
    fn pre_exec(&mut self, state: &ExecutionState) -> Vec<Patch> {
        if let Some(tracer) = &mut self.tracer {
            tracer.observe(state);
        }
        if let Some(coverage) = &mut self.coverage {
            coverage.observe(state);
        }
        Vec::new()
    }

    fn input(&mut self) -> Option<u8> {
        if self.pending.is_empty() {
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => self.pending.extend(line.bytes()),
            }
        }
        self.pending.pop_front()
    }

    fn output(&mut self, byte: u8) {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        let _ = stdout.write_all(&[byte]);
        let _ = stdout.flush();
    }
}

/// Loads an image into fresh memory and runs it to completion.
pub fn run_image<H: Host>(image: &[u8], host: &mut H) -> (Memory, ExitCode) {
    let mut memory = Memory::new();
    memory.load(image);
    let exit_code = Cpu::new(&mut memory).run(host);
    (memory, exit_code)
}

pub fn run_image_file<P: AsRef<Path>, H: Host>(
    path: P,
    host: &mut H,
) -> Result<(Memory, ExitCode), Error> {
    let image = synimg::read_file(&path)
        .map_err(|err| Error::Io(err, path.as_ref().to_owned()))?;
    Ok(run_image(image.bytes(), host))
}

/// Assembles a source file and runs the result directly, without writing an
/// image to disk. Assembler warnings go to stderr.
pub fn run_assembly_file<P: AsRef<Path>, H: Host>(
    path: P,
    host: &mut H,
) -> Result<(Memory, ExitCode), Error> {
    let path = path.as_ref();
    let source =
        fs::read_to_string(path).map_err(|err| Error::Io(err, path.to_owned()))?;

    let (bytecode, warnings) =
        synasm::assemble(&path.to_string_lossy(), &source).map_err(Error::Asm)?;
    for warning in &warnings {
        eprintln!("{}", warning);
    }

    Ok(run_image(&bytecode, host))
}

/// Reads console lines on behalf of a host; stdin for the binaries,
/// scripted buffers in tests.
pub(crate) fn read_console_line<R: BufRead>(console: &mut R) -> Option<String> {
    let mut line = String::new();
    match console.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Some(line)
        }
    }
}
