use super::*;

#[test]
fn bitwise_or() {
    let (memory, _) = run_halted![op(Verb::OR), R0, 0b1100, 0b1010, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(0b1110));
}

#[test]
fn or_with_zero_is_identity() {
    let (memory, _) = run_halted![op(Verb::OR), R0, 0x1234, 0, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(0x1234));
}
