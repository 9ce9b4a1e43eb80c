use super::*;

#[test]
fn reads_one_byte_per_call() {
    let (exit_code, memory, _) = run_program(
        &[op(Verb::IN), R0, op(Verb::IN), R1, op(Verb::HALT)],
        "hi",
    );

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(memory.register(0), Word::new(u16::from(b'h')));
    assert_eq!(memory.register(1), Word::new(u16::from(b'i')));
}

#[test]
fn exhausted_input_is_an_error() {
    let (exit_code, _, _) = run_program(&[op(Verb::IN), R0], "");

    assert_eq!(exit_code, ExitCode::OutOfInput);
}
