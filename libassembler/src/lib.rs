use libisa::Word;
use log::debug;
use thiserror::Error;

pub mod line;

#[cfg(test)]
mod tests;

pub use line::SyntaxError;

/// A syntax error tied to its 1-based source line. The first one aborts
/// assembly of the whole file; partial output is never produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct AssemblyError {
    pub line: usize,

    #[source]
    pub source: SyntaxError,
}

pub struct Assembler<'a> {
    source: &'a str,
}

impl<'a> Assembler<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Assembles the whole source into machine words, one per instruction
    /// in program order.
    pub fn assemble(self) -> Result<Vec<Word>, AssemblyError> {
        let mut output = Vec::new();

        for (index, source_line) in self.source.lines().enumerate() {
            let parsed = line::parse_line(source_line).map_err(|source| AssemblyError {
                line: index + 1,
                source,
            })?;

            match parsed {
                Some(instruction) => output.push(instruction.assemble()),
                None => debug!("skipping line {}", index + 1),
            }
        }

        Ok(output)
    }

    /// Assembles to the canonical interchange format: one 4-digit uppercase
    /// hex word per line.
    pub fn assemble_text(self) -> Result<String, AssemblyError> {
        let words = self.assemble()?;

        Ok(words
            .into_iter()
            .map(|word| libisa::word_to_hex(word) + "\n")
            .collect())
    }
}
