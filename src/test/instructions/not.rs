use super::*;

#[test]
fn inverts_zero_to_the_15_bit_maximum() {
    let (memory, _) = run_halted![op(Verb::NOT), R0, 0, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(0x7fff));
}

#[test]
fn register_source() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R1,
        0b101,
        op(Verb::NOT),
        R0,
        R1,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(0), Word::new(0x7ffa));
}

#[test]
fn high_bit_stays_clear() {
    let (memory, _) = run_halted![op(Verb::NOT), R0, 0x7fff, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::ZERO);
}
