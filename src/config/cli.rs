use crate::core::ConfigProvider;
use crate::domain::model::CaseMode;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "romans")]
#[command(about = "Convert between decimals and Roman numerals")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Accept lowercase and mixed-case numerals
    #[arg(long, global = true)]
    pub fold_case: bool,

    /// Answer from a precomputed table of all numerals
    #[arg(long, global = true)]
    pub memoize: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write decimals as Roman numerals
    Romanize {
        #[arg(required = true, allow_negative_numbers = true)]
        decimals: Vec<String>,
    },
    /// Read Roman numerals as decimals
    Deromanize {
        #[arg(required = true)]
        numerals: Vec<String>,
    },
    /// Check whether each input is a well-formed numeral
    Validate {
        #[arg(required = true)]
        numerals: Vec<String>,
    },
    /// Print the symbol table
    Table,
}

impl ConfigProvider for CliConfig {
    fn case_mode(&self) -> CaseMode {
        if self.fold_case {
            CaseMode::Fold
        } else {
            CaseMode::Strict
        }
    }

    fn memoize(&self) -> bool {
        self.memoize
    }
}
