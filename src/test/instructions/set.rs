use super::*;

#[test]
fn literal_into_register() {
    let (memory, _) = run_halted![op(Verb::SET), R0, 7, op(Verb::HALT)];

    assert_eq!(memory.register(0), Word::new(7));
}

#[test]
fn register_into_register() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R0,
        7,
        op(Verb::SET),
        R1,
        R0,
        op(Verb::HALT),
    ];

    assert_eq!(memory.register(1), Word::new(7));
}

#[test]
fn literal_destination_writes_the_heap_cell() {
    let (memory, _) = run_halted![op(Verb::SET), 6, 123, op(Verb::HALT)];

    assert_eq!(memory.heap()[6], Word::new(123));
}
