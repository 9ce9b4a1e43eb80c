use super::*;

#[test]
fn skips_forward() {
    let (_, output) = run_halted![op(Verb::JMP), 4, op(Verb::OUT), 65, op(Verb::HALT)];

    assert!(output.is_empty());
}

#[test]
fn jumps_backward() {
    let (_, output) = run_halted![
        op(Verb::JMP),
        5,
        op(Verb::HALT),
        op(Verb::OUT),
        65,
        op(Verb::JMP),
        2,
    ];

    assert!(output.is_empty());
}

#[test]
fn target_outside_heap_range() {
    // The register is loaded with an out of range word through RMEM.
    run_exits!(
        [op(Verb::RMEM), R0, 5, op(Verb::JMP), R0, 0x9000],
        BadJump
    );
}
