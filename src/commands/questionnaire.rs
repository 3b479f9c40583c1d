use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::{print_json, Service};

pub fn run(service: &Service, session_id: &str, answers_file: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&answers_file)
        .with_context(|| format!("reading {}", answers_file.display()))?;
    let answers = service.submit_questionnaire_json(session_id, &text)?;
    eprintln!("Questionnaire saved for session {}", session_id);
    print_json(&answers)
}
