use std::collections::BTreeMap;

use matches::debug_assert_matches;
use synvm::constants;

use crate::error::{Diagnostic, Error, Warning};
use crate::grammar::{Location, Symbol};
use crate::parser::ParseTree;

#[derive(Default)]
struct Reference {
    value: [u8; 2],
    locations: Vec<usize>,
    declaration: Option<Location>,
    first_use: Option<Location>,
}

/// Flattens a parse tree into bytecode.
///
/// The first pass walks the tree depth first, copying every literal payload
/// into the buffer. Tag declarations record the current word offset; tag
/// references record the byte offset of a placeholder word. The second pass
/// overwrites each placeholder with its declared value.
pub fn generate(tree: &ParseTree) -> Result<(Vec<u8>, Vec<Warning>), Error> {
    debug_assert_matches!(tree.node(tree.root()).token.symbol, Symbol::Start);

    let mut references: BTreeMap<String, Reference> = BTreeMap::new();
    let mut buffer: Vec<u8> = Vec::new();
    let mut write_ptr = 0usize; // in words

    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        match node.token.symbol {
            Symbol::End => break,

            Symbol::Eol => {}

            Symbol::TagDecl => {
                let name = node.token.as_str();
                let reference = references
                    .entry(name.clone())
                    .or_insert_with(Reference::default);
                if let Some(previous) = &reference.declaration {
                    return Err(Error::Semantic(Diagnostic::new(
                        node.token.location.clone(),
                        format!(
                            "Reference {} declared twice\n  Previous declaration: {}",
                            name, previous
                        ),
                    )));
                }
                reference.declaration = Some(node.token.location.clone());
                reference.value = [(write_ptr & 0xff) as u8, ((write_ptr >> 8) & 0xff) as u8];
            }

            Symbol::TagRef => {
                let reference = references
                    .entry(node.token.as_str())
                    .or_insert_with(Reference::default);
                if reference.first_use.is_none() {
                    reference.first_use = Some(node.token.location.clone());
                }
                // Locations are byte offsets; the buffer is byte addressed.
                reference.locations.push(write_ptr * constants::WORD_BYTES);
                buffer.extend_from_slice(&[0xff, 0xff]);
                write_ptr += 1;
            }

            Symbol::NumberLiteral
            | Symbol::CharacterLiteral
            | Symbol::StringLiteral
            | Symbol::Register
            | Symbol::Verb => {
                buffer.extend_from_slice(&node.token.data);
                let mut len = node.token.data.len();
                if len % constants::WORD_BYTES != 0 {
                    buffer.push(0);
                    len += 1;
                }
                write_ptr += len / constants::WORD_BYTES;
            }

            Symbol::Start
            | Symbol::P
            | Symbol::T
            | Symbol::I
            | Symbol::D
            | Symbol::W
            | Symbol::R => {
                for &child in node.children.iter().rev() {
                    stack.push(child);
                }
            }

            Symbol::None | Symbol::UnknownIdentifier | Symbol::Error => {
                unreachable!("parse tree contains token {}", node.token)
            }
        }
    }

    let mut warnings = Vec::new();
    for (name, reference) in &references {
        let declaration = match &reference.declaration {
            Some(location) => location,
            None => {
                let location = reference.first_use.clone().unwrap_or_default();
                return Err(Error::Semantic(Diagnostic::new(
                    location,
                    format!("code generation error: reference {} is undefined", name),
                )));
            }
        };

        if reference.locations.is_empty() {
            warnings.push(Diagnostic::new(
                declaration.clone(),
                format!("Warning. Reference {} is unused", name),
            ));
        }

        for &location in &reference.locations {
            buffer[location] = reference.value[0];
            buffer[location + 1] = reference.value[1];
        }
    }

    Ok((buffer, warnings))
}
