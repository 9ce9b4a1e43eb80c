use super::*;

#[test]
fn writes_a_heap_cell() {
    let (memory, _) = run_halted![op(Verb::WMEM), 5, 99, op(Verb::HALT)];

    assert_eq!(memory.heap()[5], Word::new(99));
}

#[test]
fn register_source() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R2,
        321,
        op(Verb::WMEM),
        7,
        R2,
        op(Verb::HALT),
    ];

    assert_eq!(memory.heap()[7], Word::new(321));
}

#[test]
fn address_outside_heap_range() {
    run_exits!(
        [op(Verb::RMEM), R0, 5, op(Verb::WMEM), R0, 1, 0x9000],
        BadMemoryAccess
    );
}
