#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs;
use std::process;

use synasm::{tokenize, Symbol};

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Reading input file \"{}\" failed: {}", input, err);
            process::exit(1);
        }
    };

    let (tokens, ok) = tokenize(input, &source);

    println!("Tokenization:");
    for token in &tokens {
        print!("{} ", token);
        if token.symbol == Symbol::Eol {
            println!();
        }
    }
    println!();

    if !ok {
        for token in tokens.iter().filter(|token| token.symbol == Symbol::Error) {
            eprintln!("{}: {}", token.location, token.as_str());
        }
        process::exit(1);
    }
}
