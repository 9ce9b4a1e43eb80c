use super::*;

#[test]
fn empty_stack_halts_cleanly() {
    let (_, output) = run_halted![op(Verb::RET), op(Verb::OUT), 65];

    assert!(output.is_empty());
}

#[test]
fn jumps_to_the_popped_address() {
    let (_, output) = run_halted![op(Verb::PUSH), 3, op(Verb::RET), op(Verb::HALT)];

    assert!(output.is_empty());
}
