use super::*;

#[test]
fn equal_values() {
    let (memory, _) = run_halted![op(Verb::EQ), R0, 4, 4, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(1));
}

#[test]
fn different_values() {
    let (memory, _) = run_halted![op(Verb::EQ), R0, 4, 5, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::ZERO);
}

#[test]
fn register_operands() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R1,
        17,
        op(Verb::EQ),
        R0,
        R1,
        17,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(0), Word::new(1));
}
