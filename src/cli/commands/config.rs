use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = &cli.command
    {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                warning(format!(
                    "Configuration file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
            } else {
                if path.exists() {
                    info(format!("Overwriting {}", path.display()));
                }
                Config::default().save(&path)?;
                success(format!("Config file: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            print!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
