use anyhow::anyhow;
use libisa::{Register, Word};
use memory::Memory;

pub mod execute;
pub mod memory;

pub struct Emulator {
    pub memory: Memory,
    pub reg_file: [Word; libisa::REGISTER_COUNT],
    pub pc: Word,
    pub running: bool,
}

impl Emulator {
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            reg_file: [0; libisa::REGISTER_COUNT],
            pc: 0,
            running: true,
        }
    }

    /// Copies a program image into memory starting at address 0 and rewinds
    /// the pc. Memory past the image keeps its previous contents.
    pub fn load_program(&mut self, program: &[Word]) -> anyhow::Result<()> {
        if program.len() > libisa::MEMORY_SIZE {
            return Err(anyhow!(
                "Program ({} words) doesn't fit into memory ({} words)",
                program.len(),
                libisa::MEMORY_SIZE
            ));
        }

        self.memory.load(program);
        self.pc = 0;

        Ok(())
    }

    /// Loads hex interchange text, one word per line. Blank lines are
    /// skipped; a line that isn't valid hex loads as word zero.
    pub fn load_hex_text(&mut self, text: &str) -> anyhow::Result<()> {
        let words: Vec<Word> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(libisa::hex_to_word)
            .collect();

        self.load_program(&words)
    }

    pub fn register(&self, index: Register) -> Word {
        *self
            .reg_file
            .get(index)
            .expect("Out of bounds register access")
    }

    pub fn register_mut(&mut self, index: Register) -> &mut Word {
        self.reg_file
            .get_mut(index)
            .expect("Out of bounds register access")
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
