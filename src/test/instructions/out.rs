use super::*;

#[test]
fn writes_one_byte() {
    let (_, output) = run_halted![op(Verb::OUT), 65, op(Verb::HALT)];

    assert_eq!(output, b"A");
}

#[test]
fn register_operand() {
    let (_, output) = run_halted![
        op(Verb::SET),
        R0,
        10,
        op(Verb::OUT),
        R0,
        op(Verb::HALT),
    ];

    assert_eq!(output, b"\n");
}

#[test]
fn byte_range_boundary() {
    let (_, output) = run_halted![op(Verb::OUT), 255, op(Verb::HALT)];

    assert_eq!(output, vec![255]);
}

#[test]
fn value_above_the_byte_range() {
    run_exits!([op(Verb::OUT), 300], BadOutput);
}

#[test]
fn smallest_rejected_value() {
    run_exits!([op(Verb::OUT), 256], BadOutput);
}
