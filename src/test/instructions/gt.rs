use super::*;

#[test]
fn greater() {
    let (memory, _) = run_halted![op(Verb::GT), R0, 5, 3, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(1));
}

#[test]
fn smaller() {
    let (memory, _) = run_halted![op(Verb::GT), R0, 3, 5, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::ZERO);
}

#[test]
fn register_operands() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R1,
        9,
        op(Verb::GT),
        R0,
        R1,
        8,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(0), Word::new(1));
}

#[test]
fn equal_is_not_greater() {
    let (memory, _) = run_halted![op(Verb::GT), R0, 5, 5, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::ZERO);
}
