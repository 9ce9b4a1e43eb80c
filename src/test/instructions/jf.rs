use super::*;

#[test]
fn taken_on_zero() {
    let (_, output) = run_halted![op(Verb::JF), 0, 5, op(Verb::OUT), 65, op(Verb::HALT)];

    assert!(output.is_empty());
}

#[test]
fn not_taken_on_nonzero() {
    let (_, output) = run_halted![op(Verb::JF), 7, 5, op(Verb::OUT), 65, op(Verb::HALT)];

    assert_eq!(output, b"A");
}
