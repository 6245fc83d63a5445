use crate::{Assembler, AssemblyError, SyntaxError};

#[test]
fn assembles_the_reference_program() {
    let source = "ADD R1 R2 R3   ; comment\nNOT R4 R1\nHALT\n";

    let words = Assembler::new(source).assemble().unwrap();
    assert_eq!(words, [0x5283, 0x3840, 0xF000]);
}

#[test]
fn assemble_text_is_one_hex_word_per_line() {
    let source = "ADD R1 R2 R3\nNOT R4 R1\nHALT\n";

    let text = Assembler::new(source).assemble_text().unwrap();
    assert_eq!(text, "5283\n3840\nF000\n");
}

#[test]
fn blank_and_comment_lines_produce_no_words() {
    let source = "\n; header comment\n\nHALT\n   ; trailing comment\n";

    let words = Assembler::new(source).assemble().unwrap();
    assert_eq!(words, [0xF000]);
}

#[test]
fn empty_source_assembles_to_nothing() {
    assert!(Assembler::new("").assemble().unwrap().is_empty());
}

#[test]
fn commas_between_operands_are_optional() {
    let with_commas = Assembler::new("ADD R1, R2, R3").assemble().unwrap();
    let without = Assembler::new("ADD R1 R2 R3").assemble().unwrap();

    assert_eq!(with_commas, without);
}

#[test]
fn first_error_aborts_with_its_line_number() {
    // Line 1 is valid; the file must still produce no usable output.
    let source = "ADD R1 R2 R3\nADD R8 R0 R0\nHALT\n";

    let err = Assembler::new(source).assemble().unwrap_err();
    assert_eq!(
        err,
        AssemblyError {
            line: 2,
            source: SyntaxError::InvalidRegister("R8".to_string()),
        }
    );
}

#[test]
fn line_numbers_count_skipped_lines() {
    let source = "; comment\n\nBADOP\n";

    let err = Assembler::new(source).assemble().unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.source, SyntaxError::UnknownMnemonic("BADOP".to_string()));
}

#[test]
fn error_display_names_the_line_and_token() {
    let err = Assembler::new("HALT R1").assemble_text().unwrap_err();
    assert_eq!(err.to_string(), "line 1: HALT takes 0 operand(s), found 1");
}
