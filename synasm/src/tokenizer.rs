use std::mem;
use std::rc::Rc;
use std::str::FromStr;

use synvm::constants;
use synvm::Verb;

use crate::grammar::{Location, Symbol, Token};

fn escape(ch: char) -> Option<char> {
    match ch {
        '0' => Some('\0'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'v' => Some('\x0b'),
        'b' => Some('\x08'),
        'r' => Some('\r'),
        'f' => Some('\x0c'),
        'a' => Some('\x07'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.'
}

enum CharStage {
    Open,
    Escape,
    Got(char),
    Closed(char),
}

enum State {
    None,
    Eol,
    Identifier {
        text: String,
    },
    Number {
        base: Option<u32>,
        value: u32,
        digits: u32,
    },
    Character {
        stage: CharStage,
    },
    Str {
        text: String,
        escaped: bool,
        closed: bool,
    },
    Error,
}

/// The tokenizer state machine, driven one character at a time.
///
/// Tokens end on a space or newline; a newline additionally emits one EOL
/// for the whole whitespace run it starts. After an error the machine eats
/// the rest of the line and picks up again on the next one.
struct Scanner {
    state: State,
    start: Location,
}

impl Scanner {
    fn new() -> Scanner {
        Scanner {
            state: State::None,
            start: Location::default(),
        }
    }

    fn feed(&mut self, ch: char, location: &Location, out: &mut Vec<Token>) {
        loop {
            let state = mem::replace(&mut self.state, State::None);
            let again = match state {
                State::None => self.begin(ch, location, out),

                State::Eol => {
                    if ch == '\n' || ch == ' ' {
                        self.state = State::Eol;
                        false
                    } else {
                        true
                    }
                }

                State::Error => {
                    if ch == '\n' {
                        true
                    } else {
                        self.state = State::Error;
                        false
                    }
                }

                State::Identifier { mut text } => {
                    if ch == ' ' || ch == '\n' {
                        out.push(finish_identifier(text, self.start.clone()));
                        true
                    } else if is_identifier_char(ch) {
                        text.push(ch);
                        self.state = State::Identifier { text };
                        false
                    } else {
                        self.error(
                            location,
                            format!("Unexpected character in identifier: ascii {}", ch as u32),
                            out,
                        )
                    }
                }

                State::Number {
                    base,
                    value,
                    digits,
                } => self.number(ch, base, value, digits, location, out),

                State::Character { stage } => self.character(ch, stage, location, out),

                State::Str {
                    text,
                    escaped,
                    closed,
                } => self.string(ch, text, escaped, closed, location, out),
            };

            if !again {
                return;
            }
        }
    }

    /// Handles a character between tokens; picks the state for the next one.
    fn begin(&mut self, ch: char, location: &Location, out: &mut Vec<Token>) -> bool {
        match ch {
            '\n' => {
                out.push(Token::new(Symbol::Eol, Vec::new(), location.clone()));
                self.state = State::Eol;
                false
            }
            ' ' => false,
            '0' => {
                self.start = location.clone();
                self.state = State::Number {
                    base: None,
                    value: 0,
                    digits: 1,
                };
                false
            }
            '1'..='9' => {
                self.start = location.clone();
                self.state = State::Number {
                    base: Some(10),
                    value: u32::from(ch as u8 - b'0'),
                    digits: 1,
                };
                false
            }
            '\'' => {
                self.start = location.clone();
                self.state = State::Character {
                    stage: CharStage::Open,
                };
                false
            }
            '"' => {
                self.start = location.clone();
                self.state = State::Str {
                    text: String::new(),
                    escaped: false,
                    closed: false,
                };
                false
            }
            _ if is_identifier_char(ch) => {
                self.start = location.clone();
                self.state = State::Identifier {
                    text: ch.to_string(),
                };
                false
            }
            _ => self.error(
                location,
                format!("Unexpected character: ascii {}", ch as u32),
                out,
            ),
        }
    }

    fn number(
        &mut self,
        ch: char,
        base: Option<u32>,
        value: u32,
        digits: u32,
        location: &Location,
        out: &mut Vec<Token>,
    ) -> bool {
        // A prefix directly after the leading zero selects the base.
        if base.is_none() && digits == 1 {
            match ch {
                'b' => {
                    self.state = State::Number {
                        base: Some(2),
                        value: 0,
                        digits: 0,
                    };
                    return false;
                }
                'x' => {
                    self.state = State::Number {
                        base: Some(16),
                        value: 0,
                        digits: 0,
                    };
                    return false;
                }
                _ => {}
            }
        }

        if ch == ' ' || ch == '\n' {
            if digits > 0 {
                out.push(Token::new(
                    Symbol::NumberLiteral,
                    Token::number_payload(value as u16),
                    self.start.clone(),
                ));
                return true;
            }
            return self.error(
                &self.start.clone(),
                format!(
                    "Unexpected end of digit in base-{} number literal",
                    base.unwrap_or(8)
                ),
                out,
            );
        }

        if ch == '_' {
            // Digit separator, ignored.
            self.state = State::Number {
                base,
                value,
                digits,
            };
            return false;
        }

        // A leading zero without a letter prefix means octal.
        let base = base.unwrap_or(8);
        let digit = match ch {
            '0'..='9' => u32::from(ch as u8 - b'0'),
            'a'..='z' => 10 + u32::from(ch as u8 - b'a'),
            'A'..='Z' => 10 + u32::from(ch as u8 - b'A'),
            _ => {
                return self.error(
                    location,
                    format!("Unexpected digit in base-{} number literal: {}", base, ch),
                    out,
                );
            }
        };

        if digit >= base {
            return self.error(
                location,
                format!("Unexpected digit in base-{} number literal: {}", base, ch),
                out,
            );
        }

        let value = value * base + digit;
        if value > 0xffff {
            return self.error(
                &self.start.clone(),
                "Number literal does not fit in 16 bits".to_owned(),
                out,
            );
        }

        self.state = State::Number {
            base: Some(base),
            value,
            digits: digits + 1,
        };
        false
    }

    fn character(
        &mut self,
        ch: char,
        stage: CharStage,
        location: &Location,
        out: &mut Vec<Token>,
    ) -> bool {
        match stage {
            CharStage::Open => match ch {
                '\n' => self.error(
                    &self.start.clone(),
                    "Unexpected end of character literal".to_owned(),
                    out,
                ),
                '\\' => {
                    self.state = State::Character {
                        stage: CharStage::Escape,
                    };
                    false
                }
                _ => {
                    self.state = State::Character {
                        stage: CharStage::Got(ch),
                    };
                    false
                }
            },

            CharStage::Escape => {
                if ch == '\n' {
                    return self.error(
                        &self.start.clone(),
                        "Unexpected end of character literal".to_owned(),
                        out,
                    );
                }
                match escape(ch) {
                    Some(escaped) => {
                        self.state = State::Character {
                            stage: CharStage::Got(escaped),
                        };
                        false
                    }
                    None => self.error(
                        location,
                        format!("Invalid escaped character \\{}", ch),
                        out,
                    ),
                }
            }

            CharStage::Got(value) => match ch {
                '\'' => {
                    self.state = State::Character {
                        stage: CharStage::Closed(value),
                    };
                    false
                }
                '\n' => self.error(
                    &self.start.clone(),
                    "Unexpected end of character literal".to_owned(),
                    out,
                ),
                _ => self.error(
                    location,
                    format!("Expected closing single quote ('), got ascii {}", ch as u32),
                    out,
                ),
            },

            CharStage::Closed(value) => {
                if ch == ' ' || ch == '\n' {
                    out.push(Token::new(
                        Symbol::CharacterLiteral,
                        Token::number_payload(value as u16),
                        self.start.clone(),
                    ));
                    return true;
                }
                self.error(
                    location,
                    format!(
                        "Unexpected character after closing quote ('), got ascii {}",
                        ch as u32
                    ),
                    out,
                )
            }
        }
    }

    fn string(
        &mut self,
        ch: char,
        mut text: String,
        escaped: bool,
        closed: bool,
        location: &Location,
        out: &mut Vec<Token>,
    ) -> bool {
        if closed {
            if ch == ' ' || ch == '\n' {
                out.push(Token::new(
                    Symbol::StringLiteral,
                    Token::text_payload(&text),
                    self.start.clone(),
                ));
                return true;
            }
            return self.error(
                location,
                format!(
                    "Unexpected character after closing quote (\"), got ascii {}",
                    ch as u32
                ),
                out,
            );
        }

        if ch == '\n' {
            return self.error(
                &self.start.clone(),
                "Missing endquote to close string literal".to_owned(),
                out,
            );
        }

        if escaped {
            return match escape(ch) {
                Some(unescaped) => {
                    text.push(unescaped);
                    self.state = State::Str {
                        text,
                        escaped: false,
                        closed: false,
                    };
                    false
                }
                None => self.error(
                    location,
                    format!("Invalid escaped character \\{}", ch),
                    out,
                ),
            };
        }

        match ch {
            '\\' => {
                self.state = State::Str {
                    text,
                    escaped: true,
                    closed: false,
                };
                false
            }
            '"' => {
                self.state = State::Str {
                    text,
                    escaped: false,
                    closed: true,
                };
                false
            }
            _ => {
                text.push(ch);
                self.state = State::Str {
                    text,
                    escaped: false,
                    closed: false,
                };
                false
            }
        }
    }

    /// Emits an error token and switches to line-skipping recovery. Returns
    /// true so the offending character is reprocessed; a newline then ends
    /// the recovery immediately.
    fn error(&mut self, location: &Location, message: String, out: &mut Vec<Token>) -> bool {
        out.push(Token::new(
            Symbol::Error,
            Token::text_payload(&message),
            location.clone(),
        ));
        self.state = State::Error;
        true
    }
}

/// Classifies a completed identifier: verb keyword, register name, tag
/// declaration or tag reference, in that order.
fn finish_identifier(text: String, location: Location) -> Token {
    if let Ok(verb) = Verb::from_str(&text) {
        return Token::new(Symbol::Verb, Token::number_payload(verb.opcode()), location);
    }

    let bytes = text.as_bytes();
    if bytes.len() == 2 && bytes[0] == b'r' && bytes[1].is_ascii_digit() {
        let register = u16::from(bytes[1] - b'0');
        return Token::new(
            Symbol::Register,
            Token::number_payload(constants::REGISTER_BASE + register),
            location,
        );
    }

    if let Some(name) = text.strip_suffix(':') {
        return Token::new(Symbol::TagDecl, Token::text_payload(name), location);
    }

    Token::new(Symbol::TagRef, Token::text_payload(&text), location)
}

/// Tokenizes a whole source file.
///
/// The returned stream always ends with an END token; the flag is false if
/// any error token was produced along the way.
///
/// # Examples
/// ```
/// use synasm::{tokenize, Symbol};
///
/// let (tokens, ok) = tokenize("hello.syn", "out 65\n");
///
/// assert!(ok);
/// let symbols: Vec<Symbol> = tokens.iter().map(|token| token.symbol).collect();
/// assert_eq!(
///     symbols,
///     vec![Symbol::Verb, Symbol::NumberLiteral, Symbol::Eol, Symbol::End]
/// );
/// ```
pub fn tokenize(file: &str, source: &str) -> (Vec<Token>, bool) {
    let file: Rc<str> = Rc::from(file);
    let mut scanner = Scanner::new();
    let mut out = Vec::new();

    let mut row = 1;
    let mut col = 0;
    for ch in source.chars() {
        col += 1;
        scanner.feed(ch, &Location::new(&file, row, col), &mut out);
        if ch == '\n' {
            row += 1;
            col = 0;
        }
    }

    // Sentinel newline: closes the last token and the last line.
    scanner.feed('\n', &Location::new(&file, row, col + 1), &mut out);
    out.push(Token::new(
        Symbol::End,
        Vec::new(),
        Location::new(&file, row, col + 1),
    ));

    let ok = out.iter().all(|token| token.symbol != Symbol::Error);
    (out, ok)
}
