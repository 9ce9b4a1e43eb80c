use super::*;

#[test]
fn multiplies_literals() {
    let (memory, _) = run_halted![op(Verb::MULT), R0, 6, 7, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(42));
}

#[test]
fn register_operands() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R2,
        12,
        op(Verb::MULT),
        R0,
        R2,
        3,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(0), Word::new(36));
}

#[test]
fn wraps_at_the_15_bit_bound() {
    let (memory, _) = run_halted![op(Verb::MULT), R0, 0x4000, 2, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::ZERO);
}
