use super::*;

#[test]
fn bitwise_and() {
    let (memory, _) = run_halted![op(Verb::AND), R0, 0b1100, 0b1010, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(0b1000));
}

#[test]
fn register_operands() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R1,
        0x7fff,
        op(Verb::AND),
        R0,
        R1,
        0x1234,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(0), Word::new(0x1234));
}
