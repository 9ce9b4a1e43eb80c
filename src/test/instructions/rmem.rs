use super::*;

#[test]
fn reads_a_heap_cell() {
    let (memory, _) = run_halted![op(Verb::RMEM), R0, 4, op(Verb::HALT), 1234];

    assert_eq!(memory.register(0), Word::new(1234));
}

#[test]
fn address_outside_heap_range() {
    run_exits!(
        [op(Verb::RMEM), R0, 5, op(Verb::RMEM), R1, R0, 0x9000],
        BadMemoryAccess
    );
}
