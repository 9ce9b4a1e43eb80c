use super::*;

#[test]
fn unknown_opcode() {
    run_exits!([22], InvalidOpcode);
}

#[test]
fn destination_above_the_register_window() {
    run_exits!([op(Verb::SET), 0x8009, 1], InvalidWord);
}

#[test]
fn operand_above_the_register_window() {
    run_exits!([op(Verb::PUSH), 0xffff], InvalidWord);
}
