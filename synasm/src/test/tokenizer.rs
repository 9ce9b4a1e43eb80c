use super::*;

fn single(source: &str) -> Token {
    let tokens = tokens_of(source);
    assert_eq!(
        symbols(&tokens)[1..],
        [Symbol::Eol, Symbol::End],
        "expected exactly one token in {:?}",
        source
    );
    tokens[0].clone()
}

fn first_error(source: &str) -> Token {
    let (tokens, ok) = tokenize("test.syn", source);
    assert!(!ok, "expected a tokenizer error in {:?}", source);
    tokens
        .into_iter()
        .find(|token| token.symbol == Symbol::Error)
        .unwrap()
}

#[test]
fn empty_source() {
    let tokens = tokens_of("");

    assert_eq!(symbols(&tokens), vec![Symbol::Eol, Symbol::End]);
}

#[test]
fn whitespace_only_source() {
    let tokens = tokens_of("   \n \n  ");

    assert_eq!(symbols(&tokens), vec![Symbol::Eol, Symbol::End]);
}

#[test]
fn consecutive_newlines_collapse_to_one_eol() {
    let tokens = tokens_of("halt\n\n\nnoop\n");

    assert_eq!(
        symbols(&tokens),
        vec![
            Symbol::Verb,
            Symbol::Eol,
            Symbol::Verb,
            Symbol::Eol,
            Symbol::End
        ]
    );
}

#[test]
fn missing_final_newline_is_supplied() {
    let tokens = tokens_of("halt");

    assert_eq!(
        symbols(&tokens),
        vec![Symbol::Verb, Symbol::Eol, Symbol::End]
    );
}

#[test]
fn all_verb_keywords() {
    let source = "halt set push pop eq gt jmp jt jf add mult mod and or not \
                  rmem wmem call ret out in noop\n";
    let tokens = tokens_of(source);

    let opcodes: Vec<u16> = tokens
        .iter()
        .filter(|token| token.symbol == Symbol::Verb)
        .map(|token| token.as_number())
        .collect();
    assert_eq!(opcodes, (0..22).collect::<Vec<u16>>());
}

#[test]
fn registers() {
    let tokens = tokens_of("r0 r7\n");

    assert_eq!(tokens[0].symbol, Symbol::Register);
    assert_eq!(tokens[0].as_number(), 0x8000);
    assert_eq!(tokens[0].data, vec![0x00, 0x80]);
    assert_eq!(tokens[1].as_number(), 0x8007);
}

#[test]
fn almost_registers_are_tag_refs() {
    let tokens = tokens_of("r10 rx\n");

    assert_eq!(tokens[0].symbol, Symbol::TagRef);
    assert_eq!(tokens[0].as_str(), "r10");
    assert_eq!(tokens[1].symbol, Symbol::TagRef);
}

#[test]
fn register_shaped_declaration_is_a_tag() {
    let token = single("r5:\n");

    assert_eq!(token.symbol, Symbol::TagDecl);
    assert_eq!(token.as_str(), "r5");
}

#[test]
fn identifiers_may_contain_inner_punctuation() {
    let tokens = tokens_of("a.b-c_d end:extra\n");

    assert_eq!(tokens[0].symbol, Symbol::TagRef);
    assert_eq!(tokens[0].as_str(), "a.b-c_d");
    assert_eq!(tokens[1].symbol, Symbol::TagRef);
    assert_eq!(tokens[1].as_str(), "end:extra");
}

#[test]
fn tag_declaration_strips_the_colon() {
    let token = single("loop:\n");

    assert_eq!(token.symbol, Symbol::TagDecl);
    assert_eq!(token.as_str(), "loop");
}

#[test]
fn verb_named_tag_is_still_a_tag() {
    let token = single("halt:\n");

    assert_eq!(token.symbol, Symbol::TagDecl);
    assert_eq!(token.as_str(), "halt");
}

#[test]
fn decimal_number() {
    let token = single("42\n");

    assert_eq!(token.symbol, Symbol::NumberLiteral);
    assert_eq!(token.as_number(), 42);
    assert_eq!(token.data, vec![42, 0]);
}

#[test]
fn bare_zero() {
    assert_eq!(single("0\n").as_number(), 0);
}

#[test]
fn hexadecimal_number() {
    assert_eq!(single("0x2A\n").as_number(), 42);
    assert_eq!(single("0xffff\n").as_number(), 0xffff);
}

#[test]
fn high_byte_is_encoded_shifted() {
    assert_eq!(single("0x1234\n").data, vec![0x34, 0x12]);
}

#[test]
fn binary_number() {
    assert_eq!(single("0b101\n").as_number(), 5);
}

#[test]
fn octal_number() {
    assert_eq!(single("017\n").as_number(), 15);
}

#[test]
fn digit_separators() {
    assert_eq!(single("1_000\n").as_number(), 1000);
    assert_eq!(single("0xff_ff\n").as_number(), 0xffff);
}

#[test]
fn digit_out_of_base_range() {
    let error = first_error("0b2\n");

    assert!(error.as_str().contains("base-2"));
}

#[test]
fn number_too_wide_for_a_word() {
    let error = first_error("0x10000\n");

    assert!(error.as_str().contains("16 bits"));
}

#[test]
fn dangling_base_prefix() {
    let error = first_error("0x\n");

    assert!(error.as_str().contains("Unexpected end of digit"));
}

#[test]
fn character_literal() {
    let token = single("'A'\n");

    assert_eq!(token.symbol, Symbol::CharacterLiteral);
    assert_eq!(token.as_number(), 65);
}

#[test]
fn escaped_character_literals() {
    assert_eq!(single("'\\n'\n").as_number(), 10);
    assert_eq!(single("'\\0'\n").as_number(), 0);
    assert_eq!(single("'\\\\'\n").as_number(), 92);
    assert_eq!(single("'\\''\n").as_number(), 39);
}

#[test]
fn every_escape_resolves() {
    let cases = [
        ("'\\0'", 0u16),
        ("'\\n'", 10),
        ("'\\t'", 9),
        ("'\\v'", 11),
        ("'\\b'", 8),
        ("'\\r'", 13),
        ("'\\f'", 12),
        ("'\\a'", 7),
        ("'\\\\'", 92),
        ("'\\''", 39),
        ("'\\\"'", 34),
    ];

    for (source, expected) in cases.iter() {
        let line = format!("{}\n", source);
        assert_eq!(single(&line).as_number(), *expected, "case {}", source);
    }
}

#[test]
fn uppercase_base_prefix_is_not_recognized() {
    let error = first_error("0X12\n");

    assert!(error.as_str().contains("base-8"));
}

#[test]
fn invalid_escape_fails() {
    let error = first_error("'\\q'\n");

    assert!(error.as_str().contains("Invalid escaped character"));
}

#[test]
fn multi_character_literal_fails() {
    let error = first_error("'ab'\n");

    assert!(error.as_str().contains("closing single quote"));
}

#[test]
fn unterminated_character_literal_fails() {
    let error = first_error("'a\n");

    assert!(error.as_str().contains("end of character literal"));
}

#[test]
fn string_literal_expands_characters_to_words() {
    let token = single("\"Hi\"\n");

    assert_eq!(token.symbol, Symbol::StringLiteral);
    assert_eq!(token.data, vec![b'H', 0, b'i', 0]);
    assert_eq!(token.as_str(), "Hi");
}

#[test]
fn string_escapes() {
    assert_eq!(single("\"a\\nb\"\n").as_str(), "a\nb");
    assert_eq!(single("\"say \\\"hi\\\"\"\n").as_str(), "say \"hi\"");
}

#[test]
fn newline_inside_string_fails() {
    let error = first_error("\"oops\nhalt\n");

    assert!(error.as_str().contains("Missing endquote"));
}

#[test]
fn tab_is_not_whitespace() {
    let error = first_error("\thalt\n");

    assert!(error.as_str().contains("Unexpected character"));
}

#[test]
fn stray_character_in_identifier_fails() {
    let error = first_error("foo(bar\n");

    assert!(error.as_str().contains("identifier"));
}

#[test]
fn recovery_resumes_on_the_next_line() {
    let (tokens, ok) = tokenize("test.syn", "0b2 junk after error\nhalt\n");

    assert!(!ok);
    let kinds = symbols(&tokens);
    assert_eq!(
        kinds,
        vec![
            Symbol::Error,
            Symbol::Eol,
            Symbol::Verb,
            Symbol::Eol,
            Symbol::End
        ]
    );
}

#[test]
fn locations_track_rows_and_columns() {
    let tokens = tokens_of("halt\n  out 65\n");

    assert_eq!(tokens[0].location.row, 1);
    assert_eq!(tokens[0].location.col, 1);

    // VERB out sits on row 2 behind two spaces.
    assert_eq!(tokens[2].location.row, 2);
    assert_eq!(tokens[2].location.col, 3);
    assert_eq!(tokens[3].location.row, 2);
    assert_eq!(tokens[3].location.col, 7);
}

#[test]
fn payload_accessors_tolerate_short_data() {
    let token = Token::new(Symbol::NumberLiteral, vec![7], Location::default());
    assert_eq!(token.as_number(), 7);

    let empty = Token::new(Symbol::Eol, Vec::new(), Location::default());
    assert_eq!(empty.as_number(), 0);
    assert_eq!(empty.as_str(), "");
}

#[test]
fn display_forms_round_trip_the_stream() {
    let tokens = tokens_of("start:\nout 'A' \"hi\" r3 start\n");

    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "<TAG_DECL start>",
            "<EOL>",
            "<VERB out>",
            "<CHARACTER A>",
            "<STRING hi>",
            "<REGISTER 3>",
            "<TAG_REF start>",
            "<EOL>",
            "<END>",
        ]
    );
}
