use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gdi-validator")]
#[command(about = "GDI Word Count Validator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print validator metadata instead of running a validation
    #[arg(long)]
    pub describe: bool,
}

/// Mutually exclusive invocation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Describe,
    Validate,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.describe {
            Mode::Describe
        } else {
            Mode::Validate
        }
    }
}
