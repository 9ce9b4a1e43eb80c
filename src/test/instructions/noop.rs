use super::*;

#[test]
fn has_no_effect() {
    let (memory, output) = run_halted![op(Verb::NOOP), op(Verb::NOOP), op(Verb::HALT)];

    assert!(output.is_empty());
    assert_eq!(memory.stack_depth(), 0);
    assert_eq!(memory.register(0), Word::ZERO);
}
