use clap::Parser;
use romans::core::converter::table_rows;
use romans::utils::error::ErrorSeverity;
use romans::utils::{logger, validation::Validate};
use romans::{CliConfig, Command, Conversion, Converter, RomanError, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    config.apply_overrides(&cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let converter = Converter::from_config(&config);

    let result = match &cli.command {
        Command::Romanize { decimals } => converter.romanize_all(decimals),
        Command::Deromanize { numerals } => converter.deromanize_all(numerals),
        Command::Validate { numerals } => {
            let verdicts = converter.validate_all(numerals);
            let all_valid = verdicts.iter().all(|v| v.output == "valid");
            print_conversions(&verdicts, cli.json)?;
            if !all_valid {
                std::process::exit(1);
            }
            return Ok(());
        }
        Command::Table => Ok(table_rows()),
    };

    match result {
        Ok(conversions) => print_conversions(&conversions, cli.json)?,
        Err(e) => {
            tracing::error!(
                "Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}: {}", e.user_friendly_message(), e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

fn print_conversions(conversions: &[Conversion], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(conversions)?);
    } else if conversions.len() == 1 {
        println!("{}", conversions[0].output);
    } else {
        for conversion in conversions {
            println!("{}\t{}", conversion.input, conversion.output);
        }
    }
    Ok(())
}

fn exit_code(e: &RomanError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // bad input
        ErrorSeverity::High => 1,   // bad configuration
        ErrorSeverity::Critical => 3,
    }
}
