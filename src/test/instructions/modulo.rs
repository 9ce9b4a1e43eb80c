use super::*;

#[test]
fn remainder() {
    let (memory, _) = run_halted![op(Verb::MOD), R0, 7, 3, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(1));
}

#[test]
fn register_operands() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R1,
        10,
        op(Verb::MOD),
        R0,
        R1,
        4,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(0), Word::new(2));
}

#[test]
fn zero_divisor_is_an_error() {
    run_exits!([op(Verb::MOD), R0, 7, 0], DivisionByZero);
}

#[test]
fn zero_divisor_from_a_register() {
    run_exits!([op(Verb::MOD), R0, 7, R1], DivisionByZero);
}
