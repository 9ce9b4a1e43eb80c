use synvm::Operand;

use crate::error::{Diagnostic, Error};
use crate::grammar::{Symbol, Token};

pub type NodeId = usize;

/// One parse tree node: a token and its ordered children.
#[derive(Debug)]
pub struct Node {
    pub token: Token,
    pub children: Vec<NodeId>,
}

/// The parse tree, stored as an id-indexed arena with the Start node as
/// root. Every node is owned by exactly one parent; ids keep construction,
/// traversal and teardown iterative, which matters for the deep `P` chains
/// long programs produce.
#[derive(Debug)]
pub struct ParseTree {
    nodes: Vec<Node>,
}

impl ParseTree {
    fn new() -> ParseTree {
        ParseTree {
            nodes: vec![Node {
                token: Token::bare(Symbol::Start),
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    fn push(&mut self, token: Token) -> NodeId {
        self.nodes.push(Node {
            token,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Indented depth first rendering, one node per line.
    pub fn format(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(&node.token.to_string());
            out.push('\n');
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}

/// Predictive LL(1) parse over a token stream.
///
/// The stack holds nodes still to be matched or expanded. A terminal on top
/// must match the input token and adopts its payload and location; a
/// non-terminal is replaced by the production selected by the input, its
/// right hand side pushed right to left. The stream is accepted once the
/// input is exhausted and the stack is empty.
pub fn parse(tokens: &[Token]) -> Result<ParseTree, Error> {
    let mut tree = ParseTree::new();
    let mut stack = vec![tree.root()];
    let mut index = 0;

    loop {
        let top = match stack.pop() {
            Some(id) => id,
            None => break,
        };
        if index >= tokens.len() {
            stack.push(top);
            break;
        }

        let input = &tokens[index];
        if !input.symbol.is_terminal() {
            return Err(unexpected(input));
        }

        let top_symbol = tree.node(top).token.symbol;
        if top_symbol.is_terminal() {
            if top_symbol == input.symbol {
                tree.nodes[top].token = input.clone();
                index += 1;
            } else {
                return Err(unexpected(input));
            }
        } else {
            match production(top_symbol, input) {
                Some(rhs) => {
                    let children: Vec<NodeId> = rhs
                        .iter()
                        .map(|&symbol| tree.push(Token::bare(symbol)))
                        .collect();
                    for &child in children.iter().rev() {
                        stack.push(child);
                    }
                    tree.nodes[top].children = children;
                }
                None => return Err(unexpected(input)),
            }
        }
    }

    if stack.is_empty() && index == tokens.len() {
        Ok(tree)
    } else if index < tokens.len() {
        Err(unexpected(&tokens[index]))
    } else {
        // Unreachable for tokenizer output: the trailing END token always
        // drains the prediction stack first.
        Err(Error::Syntax(Diagnostic::new(
            tokens
                .last()
                .map(|token| token.location.clone())
                .unwrap_or_default(),
            "Unexpected end of input".to_owned(),
        )))
    }
}

/// The production table, keyed by the non-terminal on top of the stack and
/// the lookahead token. `None` is a syntax error.
fn production(top: Symbol, input: &Token) -> Option<Vec<Symbol>> {
    let next = input.symbol;
    match top {
        Symbol::Start => Some(vec![Symbol::P, Symbol::End]),

        Symbol::P => match next {
            Symbol::End => Some(Vec::new()),
            Symbol::NumberLiteral
            | Symbol::CharacterLiteral
            | Symbol::StringLiteral
            | Symbol::Register
            | Symbol::TagRef => Some(vec![Symbol::D, Symbol::Eol, Symbol::P]),
            Symbol::TagDecl => Some(vec![Symbol::T, Symbol::Eol, Symbol::P]),
            Symbol::Verb => Some(vec![Symbol::I, Symbol::Eol, Symbol::P]),
            Symbol::Eol => Some(vec![Symbol::Eol, Symbol::P]),
            _ => None,
        },

        Symbol::T => {
            if next == Symbol::TagDecl {
                Some(vec![Symbol::TagDecl])
            } else {
                None
            }
        }

        // An instruction expands to its verb's operand signature: one W or R
        // slot per operand, R where the slot must name a register.
        Symbol::I => {
            if next != Symbol::Verb {
                return None;
            }
            let verb = input.as_verb()?;
            let mut rhs = vec![Symbol::Verb];
            rhs.extend(verb.operands().iter().map(|operand| match operand {
                Operand::Register => Symbol::R,
                Operand::Value => Symbol::W,
            }));
            Some(rhs)
        }

        Symbol::D => match next {
            Symbol::NumberLiteral
            | Symbol::CharacterLiteral
            | Symbol::StringLiteral
            | Symbol::Register
            | Symbol::TagRef => Some(vec![next, Symbol::D]),
            Symbol::Eol => Some(Vec::new()),
            _ => None,
        },

        Symbol::W => match next {
            Symbol::NumberLiteral
            | Symbol::CharacterLiteral
            | Symbol::Register
            | Symbol::TagRef
            | Symbol::End => Some(vec![next]),
            _ => None,
        },

        Symbol::R => {
            if next == Symbol::Register {
                Some(vec![Symbol::Register])
            } else {
                None
            }
        }

        _ => {
            debug_assert!(false, "no productions for {:?}", top);
            None
        }
    }
}

fn unexpected(token: &Token) -> Error {
    Error::Syntax(Diagnostic::new(
        token.location.clone(),
        format!("Unexpected token {}", token),
    ))
}
