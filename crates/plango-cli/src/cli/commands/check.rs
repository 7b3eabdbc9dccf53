//! Non-interactive submit.

use std::io::BufRead;

use anyhow::{Context, Result};
use plango_core::{LoginForm, SubmitOutcome};

/// Runs the submit checks and prints the notice the screen would show.
///
/// # Errors
/// Returns the `ValidationError` of a rejected attempt after printing its
/// notice, so the process exits non-zero.
pub fn run(email: &str, password: &str, json: bool) -> Result<()> {
    let mut form = LoginForm::new();
    form.set_email(email);
    form.set_password(password);

    let outcome = form.submit();
    let notice = outcome.notice();
    if json {
        let rendered = serde_json::to_string(&notice).context("serialize notice")?;
        println!("{rendered}");
    } else {
        println!("{}: {}", notice.title, notice.message);
    }

    match outcome {
        SubmitOutcome::Success { .. } => Ok(()),
        SubmitOutcome::Rejected(err) => Err(err.into()),
    }
}

/// Reads one line, dropping only the trailing line break.
///
/// # Errors
/// Fails if stdin cannot be read.
pub fn read_password_line(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("read password from stdin")?;
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}
