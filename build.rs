//! Build script to embed the default word list
//!
//! Reads the comma-separated word list and generates a Rust source file holding
//! the raw text as a string constant. Parsing and validation happen at runtime
//! so the embedded list goes through the same checks as a user-supplied file.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_source(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS_SOURCE",
        "Default hangman word list (comma-separated, period-terminated)",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_source(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &str = {content:?};").unwrap();
}
