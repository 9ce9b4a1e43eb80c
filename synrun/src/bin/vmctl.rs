#[macro_use]
extern crate clap;

use clap::Arg;
use std::io;
use std::process;

use synrun::Debugger;
use synvm::ExitCode;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("IMAGE")
                .help("Sets the bytecode image to run")
                .required(true)
                .index(1),
        )
        .get_matches();

    let image = matches.value_of("IMAGE").unwrap();

    let stdin = io::stdin();
    let mut debugger = Debugger::new(stdin.lock(), io::stdout());

    let exit_code = match synrun::run_image_file(image, &mut debugger) {
        Ok((_, exit_code)) => exit_code,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Some(coverage) = debugger.coverage() {
        eprint!("{}", coverage.summary());
    }

    if exit_code != ExitCode::Halted {
        eprintln!("{}", exit_code);
        process::exit(1);
    }
}
