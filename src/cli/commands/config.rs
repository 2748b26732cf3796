use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREEN, RESET, YELLOW};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("config serialization: {e}")))?;
            println!("{}", yaml);
        }

        // ---- CHECK ----
        if *check {
            let missing = Config::missing_fields();
            if missing.is_empty() {
                println!("{}✔ Configuration file is complete.{}", GREEN, RESET);
            } else {
                warning("Configuration file is missing fields:");
                for f in &missing {
                    println!("{}  - {}{}", YELLOW, f, RESET);
                }
                println!("\nRun `tallysheet config --migrate` to fill them with defaults.");
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            // Re-serialize the loaded config; missing fields were already
            // filled with defaults by serde.
            cfg.save()?;
            success(format!(
                "Configuration file rewritten: {:?}",
                Config::config_file()
            ));
        }
    }

    Ok(())
}
