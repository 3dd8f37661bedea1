//! The `quizmaster validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks = if bank_path.is_dir() {
        quizmaster_core::parser::load_bank_directory(&bank_path)?
    } else {
        vec![quizmaster_core::parser::parse_bank(&bank_path)?]
    };

    let mut total_warnings = 0;

    for bank in &banks {
        println!("Bank: {} ({} questions)", bank.name, bank.len());

        let warnings = quizmaster_core::parser::validate_bank(bank);
        for warning in &warnings {
            match &warning.prompt_key {
                Some(key) => println!("  [{key}] WARNING: {}", warning.message),
                None => println!("  WARNING: {}", warning.message),
            }
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
