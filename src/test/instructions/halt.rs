use super::*;

#[test]
fn stops_immediately() {
    let (memory, output) = run_halted![op(Verb::HALT), op(Verb::OUT), 65];

    assert!(output.is_empty());
    assert_eq!(memory.stack_depth(), 0);
}
