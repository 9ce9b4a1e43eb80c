use super::*;

#[test]
fn taken_on_nonzero() {
    let (_, output) = run_halted![op(Verb::JT), 1, 5, op(Verb::OUT), 65, op(Verb::HALT)];

    assert!(output.is_empty());
}

#[test]
fn not_taken_on_zero() {
    let (_, output) = run_halted![op(Verb::JT), 0, 5, op(Verb::OUT), 65, op(Verb::HALT)];

    assert_eq!(output, b"A");
}

#[test]
fn register_target() {
    let (_, output) = run_halted![
        op(Verb::SET),
        R0,
        8,
        op(Verb::JT),
        1,
        R0,
        op(Verb::OUT),
        65,
        op(Verb::HALT),
    ];

    assert!(output.is_empty());
}

#[test]
fn register_condition() {
    let (_, output) = run_halted![
        op(Verb::SET),
        R3,
        1,
        op(Verb::JT),
        R3,
        8,
        op(Verb::OUT),
        65,
        op(Verb::HALT),
    ];

    assert!(output.is_empty());
}
