use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

lazy_static! {
    // Opcode values are part of the machine word format and must never be renumbered.
    static ref KIND_OPCODE_BIMAP: BiMap<InstructionKind, usize> = BiMap::from_iter([
        (InstructionKind::Sub, 1),
        (InstructionKind::Or, 2),
        (InstructionKind::Not, 3),
        (InstructionKind::And, 4),
        (InstructionKind::Add, 5),
        (InstructionKind::Halt, 15),
    ]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Add,
    Sub,
    And,
    Or,
    Not,
    Halt,
}

impl InstructionKind {
    pub fn from_opcode(opcode: usize) -> Option<Self> {
        KIND_OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    pub fn opcode(&self) -> usize {
        *KIND_OPCODE_BIMAP
            .get_by_left(self)
            .expect("No opcode mapping for instruction kind")
    }

    /// Exact uppercase match, so "add" is not a mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        match mnemonic {
            "ADD" => Some(Self::Add),
            "SUB" => Some(Self::Sub),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "HALT" => Some(Self::Halt),
            _ => None,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Halt => "HALT",
        }
    }

    pub fn operand_count(&self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::And | Self::Or => 3,
            Self::Not => 2,
            Self::Halt => 0,
        }
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_match_the_word_format() {
        assert_eq!(InstructionKind::Add.opcode(), 5);
        assert_eq!(InstructionKind::Sub.opcode(), 1);
        assert_eq!(InstructionKind::Or.opcode(), 2);
        assert_eq!(InstructionKind::Not.opcode(), 3);
        assert_eq!(InstructionKind::And.opcode(), 4);
        assert_eq!(InstructionKind::Halt.opcode(), 15);
    }

    #[test]
    fn opcode_mapping_is_bidirectional() {
        for kind in [
            InstructionKind::Add,
            InstructionKind::Sub,
            InstructionKind::And,
            InstructionKind::Or,
            InstructionKind::Not,
            InstructionKind::Halt,
        ] {
            assert_eq!(InstructionKind::from_opcode(kind.opcode()), Some(kind));
        }
    }

    #[test]
    fn unassigned_opcodes_have_no_kind() {
        for opcode in [0, 6, 7, 8, 9, 10, 11, 12, 13, 14] {
            assert_eq!(InstructionKind::from_opcode(opcode), None);
        }
    }

    #[test]
    fn mnemonic_lookup_is_total_over_the_six_mnemonics() {
        for (mnemonic, kind) in [
            ("ADD", InstructionKind::Add),
            ("SUB", InstructionKind::Sub),
            ("AND", InstructionKind::And),
            ("OR", InstructionKind::Or),
            ("NOT", InstructionKind::Not),
            ("HALT", InstructionKind::Halt),
        ] {
            assert_eq!(InstructionKind::from_mnemonic(mnemonic), Some(kind));
        }
    }

    #[test]
    fn mnemonic_lookup_is_case_sensitive() {
        assert_eq!(InstructionKind::from_mnemonic("add"), None);
        assert_eq!(InstructionKind::from_mnemonic("Add"), None);
        assert_eq!(InstructionKind::from_mnemonic("halt"), None);
        assert_eq!(InstructionKind::from_mnemonic("MOV"), None);
        assert_eq!(InstructionKind::from_mnemonic(""), None);
    }
}
