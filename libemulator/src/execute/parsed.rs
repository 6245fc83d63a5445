use libisa::instruction::{kind::InstructionKind, Instruction};
use log::trace;

use crate::Emulator;

use super::{ExecuteErr, ExecuteOk};

impl Emulator {
    pub fn execute_parsed_instruction(
        &mut self,
        instruction: Instruction,
    ) -> Result<ExecuteOk, ExecuteErr> {
        trace!("executing {}", instruction);

        match instruction.kind {
            InstructionKind::Add => {
                let a = self.register(instruction.sr1);
                let b = self.register(instruction.sr2);

                *self.register_mut(instruction.dr) = a.wrapping_add(b);
            }

            InstructionKind::Sub => {
                let a = self.register(instruction.sr1);
                let b = self.register(instruction.sr2);

                *self.register_mut(instruction.dr) = a.wrapping_sub(b);
            }

            InstructionKind::And => {
                let a = self.register(instruction.sr1);
                let b = self.register(instruction.sr2);

                *self.register_mut(instruction.dr) = a & b;
            }

            InstructionKind::Or => {
                let a = self.register(instruction.sr1);
                let b = self.register(instruction.sr2);

                *self.register_mut(instruction.dr) = a | b;
            }

            InstructionKind::Not => {
                // The register width truncates the complement to 16 bits.
                let value = self.register(instruction.sr1);

                *self.register_mut(instruction.dr) = !value;
            }

            InstructionKind::Halt => {
                self.running = false;
                return Ok(ExecuteOk::Halted);
            }
        }

        Ok(ExecuteOk::Normal)
    }
}
