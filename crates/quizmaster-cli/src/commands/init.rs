//! The `quizmaster init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizmaster.toml
    if std::path::Path::new("quizmaster.toml").exists() {
        println!("quizmaster.toml already exists, skipping.");
    } else {
        std::fs::write("quizmaster.toml", SAMPLE_CONFIG)?;
        println!("Created quizmaster.toml");
    }

    // Create example question bank
    std::fs::create_dir_all("banks")?;
    let bank_path = std::path::Path::new("banks/india-states.toml");
    if bank_path.exists() {
        println!("banks/india-states.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, INDIA_STATES_BANK)?;
        println!("Created banks/india-states.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizmaster validate --bank banks/india-states.toml");
    println!("  2. Run: quizmaster run --bank banks/india-states.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizmaster configuration

default_bank = "banks/india-states.toml"
questions_per_session = 5
output_dir = "./quizmaster-results"
"#;

const INDIA_STATES_BANK: &str = r#"[bank]
id = "india-states"
name = "Indian States & Capitals"
description = "State capitals of India"
prompt_template = "What is the capital of {subject}?"

[[questions]]
prompt = "Andhra Pradesh"
answer = "Amaravati"

[[questions]]
prompt = "Arunachal Pradesh"
answer = "Itanagar"

[[questions]]
prompt = "Assam"
answer = "Dispur"

[[questions]]
prompt = "Bihar"
answer = "Patna"

[[questions]]
prompt = "Chhattisgarh"
answer = "Raipur"

[[questions]]
prompt = "Goa"
answer = "Panaji"

[[questions]]
prompt = "Gujarat"
answer = "Gandhinagar"

[[questions]]
prompt = "Haryana"
answer = "Chandigarh"

[[questions]]
prompt = "Himachal Pradesh"
answer = "Shimla"

[[questions]]
prompt = "Jharkhand"
answer = "Ranchi"

[[questions]]
prompt = "Karnataka"
answer = "Bengaluru"

[[questions]]
prompt = "Kerala"
answer = "Thiruvananthapuram"

[[questions]]
prompt = "Madhya Pradesh"
answer = "Bhopal"

[[questions]]
prompt = "Maharashtra"
answer = "Mumbai"

[[questions]]
prompt = "Manipur"
answer = "Imphal"

[[questions]]
prompt = "Meghalaya"
answer = "Shillong"

[[questions]]
prompt = "Mizoram"
answer = "Aizawl"

[[questions]]
prompt = "Nagaland"
answer = "Kohima"

[[questions]]
prompt = "Odisha"
answer = "Bhubaneswar"

[[questions]]
prompt = "Punjab"
answer = "Chandigarh"

[[questions]]
prompt = "Rajasthan"
answer = "Jaipur"

[[questions]]
prompt = "Sikkim"
answer = "Gangtok"

[[questions]]
prompt = "Tamil Nadu"
answer = "Chennai"

[[questions]]
prompt = "Telangana"
answer = "Hyderabad"

[[questions]]
prompt = "Tripura"
answer = "Agartala"

[[questions]]
prompt = "Uttar Pradesh"
answer = "Lucknow"

[[questions]]
prompt = "Uttarakhand"
answer = "Dehradun"

[[questions]]
prompt = "West Bengal"
answer = "Kolkata"
"#;
