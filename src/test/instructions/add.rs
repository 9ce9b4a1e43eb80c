use super::*;

#[test]
fn adds_literals() {
    let (memory, _) = run_halted![op(Verb::ADD), R0, 3, 4, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(7));
}

#[test]
fn wraps_at_the_15_bit_bound() {
    let (memory, _) = run_halted![op(Verb::ADD), R0, 0x7fff, 1, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::ZERO);
}

#[test]
fn register_operands() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R0,
        5,
        op(Verb::ADD),
        R1,
        R0,
        R0,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(1), Word::new(10));
}

#[test]
fn literal_destination_writes_the_heap_cell() {
    let (memory, _) = run_halted![op(Verb::ADD), 6, 2, 3, op(Verb::HALT)];

    assert_eq!(memory.heap()[6], Word::new(5));
}
