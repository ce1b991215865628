use clap::ValueEnum;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` to an `Auto` mode.
    /// An explicit mode is returned unchanged.
    pub fn with_env(self) -> Self {
        if self != Self::Auto {
            return self;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|val| val == "1") {
            return Self::Always;
        }
        if env::var("NO_COLOR").is_ok() || env::var("CLICOLOR").is_ok_and(|val| val == "0") {
            return Self::Never;
        }
        self
    }

    pub fn should_use_color(&self, to_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => to_terminal && !is_dumb_terminal(),
        }
    }
}

fn is_dumb_terminal() -> bool {
    env::var("TERM").is_ok_and(|term| term == "dumb")
}

/// Set the process-wide `colored` override for output going to stdout, or
/// to a file when `to_file` is set.
pub fn apply_color_mode(mode: ColorMode, to_file: bool) {
    let to_terminal = !to_file && std::io::stdout().is_terminal();
    colored::control::set_override(mode.with_env().should_use_color(to_terminal));
}
