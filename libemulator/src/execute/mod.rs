use libisa::{
    instruction::{DeassemblyError, Instruction},
    Word,
};
use thiserror::Error;

use crate::Emulator;

mod parsed;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error("illegal instruction at {addr:#06X}: {source}")]
    IllegalInstruction {
        addr: Word,

        #[source]
        source: DeassemblyError,
    },
}

impl Emulator {
    /// One atomic fetch-decode-execute cycle.
    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        let instruction = self.parse_next_instruction()?;
        self.execute_parsed_instruction(instruction)
    }

    /// Runs until a HALT or a fault. The fault is propagated immediately,
    /// distinct from a normal halt.
    pub fn execute_to_halt(&mut self) -> Result<(), ExecuteErr> {
        while self.running {
            self.execute_instruction()?;
        }

        Ok(())
    }

    fn parse_next_instruction(&mut self) -> Result<Instruction, ExecuteErr> {
        let addr = self.pc;
        let word = self.pc_next_word();

        Instruction::deassemble_word(word).map_err(|source| {
            // A fault is terminal like HALT, but stays distinguishable from it.
            self.running = false;
            ExecuteErr::IllegalInstruction { addr, source }
        })
    }

    // The pc always advances by one word; no instruction branches. Wrapping
    // at the top of the address space keeps every fetch in bounds.
    fn pc_next_word(&mut self) -> Word {
        let data = self.memory.word(self.pc);
        self.pc = self.pc.wrapping_add(1);
        data
    }
}
