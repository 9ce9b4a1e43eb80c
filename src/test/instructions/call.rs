use super::*;

#[test]
fn pushes_the_return_address() {
    let (memory, _) = run_halted![op(Verb::CALL), 3, op(Verb::NOOP), op(Verb::HALT)];

    assert_eq!(memory.stack(), &[Word::new(2)]);
}

#[test]
fn register_target() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R0,
        5,
        op(Verb::CALL),
        R0,
        op(Verb::HALT),
    ];

    assert_eq!(memory.stack(), &[Word::new(5)]);
}

#[test]
fn call_and_ret_round_trip() {
    let (memory, output) = run_halted![
        op(Verb::CALL),
        3,
        op(Verb::HALT),
        op(Verb::OUT),
        65,
        op(Verb::RET),
    ];

    assert_eq!(output, b"A");
    assert_eq!(memory.stack_depth(), 0);
}
