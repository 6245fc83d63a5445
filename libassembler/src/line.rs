use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Register,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unknown mnemonic '{0}'")]
    UnknownMnemonic(String),

    #[error("{mnemonic} takes {expected} operand(s), found {found}")]
    WrongOperandCount {
        mnemonic: InstructionKind,
        expected: usize,
        found: usize,
    },

    #[error("invalid register '{0}'")]
    InvalidRegister(String),
}

/// Everything from the first `;` onward is a comment. No escape mechanism.
pub fn strip_comment(line: &str) -> &str {
    match line.split_once(';') {
        Some((code, _)) => code,
        None => line,
    }
}

/// Commas are delimiters equivalent to whitespace, nothing more.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

/// A register token is exactly `r` or `R` followed by one digit in 0-7.
pub fn parse_register(token: &str) -> Result<Register, SyntaxError> {
    let mut chars = token.chars();

    match (chars.next(), chars.next(), chars.next()) {
        (Some('r' | 'R'), Some(digit @ '0'..='7'), None) => {
            Ok(digit as Register - '0' as Register)
        }
        _ => Err(SyntaxError::InvalidRegister(token.to_string())),
    }
}

/// Parses one source line into `None` (blank or comment-only line) or a
/// validated instruction.
pub fn parse_line(line: &str) -> Result<Option<Instruction>, SyntaxError> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return Ok(None);
    }

    let tokens = tokenize(line);
    let Some((&mnemonic, operands)) = tokens.split_first() else {
        return Ok(None);
    };

    let kind = InstructionKind::from_mnemonic(mnemonic)
        .ok_or_else(|| SyntaxError::UnknownMnemonic(mnemonic.to_string()))?;

    let instruction = match operands {
        [] if kind.operand_count() == 0 => Instruction::new(kind),

        // NOT's single source register lives in the SR1 field.
        [dr, sr] if kind.operand_count() == 2 => Instruction::new(kind)
            .with_dr(parse_register(dr)?)
            .with_sr1(parse_register(sr)?),

        [dr, sr1, sr2] if kind.operand_count() == 3 => Instruction::new(kind)
            .with_dr(parse_register(dr)?)
            .with_sr1(parse_register(sr1)?)
            .with_sr2(parse_register(sr2)?),

        _ => {
            return Err(SyntaxError::WrongOperandCount {
                mnemonic: kind,
                expected: kind.operand_count(),
                found: operands.len(),
            })
        }
    };

    Ok(Some(instruction))
}
