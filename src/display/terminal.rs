//! TTY detection and colour support

use std::env;
use std::io::IsTerminal;

/// How tables are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Styled markdown table through termimad
    Rich,
    /// Space-aligned text, safe for pipes and files
    Plain,
}

/// Pick the output style from the environment and stdout
pub fn output_style() -> OutputStyle {
    choose_style(
        env::var_os("NO_COLOR").is_some(),
        env::var("CLICOLOR_FORCE").ok().as_deref(),
        env::var("CLICOLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

/// NO_COLOR wins, then CLICOLOR_FORCE, then CLICOLOR=0, then the TTY check
fn choose_style(
    no_color: bool,
    clicolor_force: Option<&str>,
    clicolor: Option<&str>,
    is_tty: bool,
) -> OutputStyle {
    if no_color {
        return OutputStyle::Plain;
    }

    if clicolor_force.is_some_and(|v| v != "0") {
        return OutputStyle::Rich;
    }

    if clicolor == Some("0") {
        return OutputStyle::Plain;
    }

    if is_tty {
        OutputStyle::Rich
    } else {
        OutputStyle::Plain
    }
}
