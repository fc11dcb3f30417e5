use std::io::{self, Write};

use clap_complete::{generate, Shell};

use crate::app::AppError;

pub fn generate_completions(shell: Shell, buf: &mut dyn Write) {
    let mut cmd = crate::cli::styled_command();
    generate(shell, &mut cmd, "showcase", buf);
}

fn detect_shell_from(shell_var: &str) -> Option<Shell> {
    parse_shell(shell_var.rsplit('/').next()?)
}

fn parse_shell(raw: &str) -> Option<Shell> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "elvish" => Some(Shell::Elvish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        _ => None,
    }
}

pub fn run_completions_command(shell_arg: Option<&str>) -> Result<(), AppError> {
    let shell = match shell_arg {
        Some(name) => parse_shell(name)
            .ok_or_else(|| AppError::InvalidArgument(format!("unknown shell '{name}'")))?,
        None => std::env::var("SHELL")
            .ok()
            .as_deref()
            .and_then(detect_shell_from)
            .ok_or_else(|| {
                AppError::InvalidArgument(
                    "unable to detect shell from $SHELL; pass a shell name".to_string(),
                )
            })?,
    };

    let mut stdout = io::stdout().lock();
    generate_completions(shell, &mut stdout);
    Ok(())
}
