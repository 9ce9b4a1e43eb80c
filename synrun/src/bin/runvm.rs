#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use std::process;

use synrun::Terminal;
use synvm::ExitCode;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("IMAGE")
                .help("Sets the bytecode image to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Assembles and runs the given source file"),
        )
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .help("Prints every executed instruction to stderr"),
        )
        .arg(
            Arg::with_name("coverage")
                .long("coverage")
                .help("Reports executed address coverage on exit"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["IMAGE", "assembly"])
                .required(true),
        )
        .get_matches();

    let mut host = Terminal::with_observers(
        matches.is_present("coverage"),
        matches.is_present("trace"),
    );

    let result = match matches.value_of("IMAGE") {
        Some(image) => synrun::run_image_file(image, &mut host),
        None => {
            let assembly = matches.value_of("assembly").unwrap();
            synrun::run_assembly_file(assembly, &mut host)
        }
    };

    let exit_code = match result {
        Ok((_, exit_code)) => exit_code,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Some(coverage) = host.coverage() {
        eprint!("{}", coverage.summary());
    }

    if exit_code != ExitCode::Halted {
        eprintln!("{}", exit_code);
        process::exit(1);
    }
}
