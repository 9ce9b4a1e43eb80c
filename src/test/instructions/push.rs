use super::*;

#[test]
fn literals_and_registers() {
    let (memory, _) = run_halted![
        op(Verb::SET),
        R1,
        9,
        op(Verb::PUSH),
        42,
        op(Verb::PUSH),
        R1,
        op(Verb::HALT),
    ];

    assert_eq!(memory.stack(), &[Word::new(42), Word::new(9)]);
}

#[test]
fn invalid_operand() {
    run_exits!([op(Verb::PUSH), 0x8009], InvalidWord);
}
