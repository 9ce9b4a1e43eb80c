use super::*;

#[test]
fn restores_pushed_value() {
    let (memory, _) = run_halted![
        op(Verb::PUSH),
        1,
        op(Verb::POP),
        R0,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(0), Word::new(1));
    assert_eq!(memory.stack_depth(), 0);
}

#[test]
fn empty_stack_is_an_error() {
    run_exits!([op(Verb::POP), R0], EmptyStack);
}
