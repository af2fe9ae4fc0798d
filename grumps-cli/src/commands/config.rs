use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{
    DatabaseSource, load_settings_string, resolve_database_path, save_database_path,
    settings_path,
};

/// Show the settings file and the database path in effect.
pub(crate) fn run_config_show(db: Option<PathBuf>) {
    let settings = settings_path();
    let (db_path, source) = resolve_database_path(db, &settings);

    log::info!(
        "{}",
        "Player Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if settings.exists() {
        log::info!(
            "  Settings file: {} {}",
            settings.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            settings.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source_label = match source {
        DatabaseSource::CommandLine => "--db",
        DatabaseSource::SettingsFile => "settings file",
        DatabaseSource::Default => "default",
    };
    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", source_label).if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = load_settings_string(&settings) {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Save a database path to the settings file.
pub(crate) fn run_config_set_db(path: &Path) -> Result<(), CliError> {
    let absolute = std::path::absolute(path)?;
    save_database_path(&settings_path(), Some(&absolute))
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    log::info!("Database set to {}", absolute.display());
    Ok(())
}

/// Remove the saved database path, going back to the default location.
pub(crate) fn run_config_reset_db() -> Result<(), CliError> {
    save_database_path(&settings_path(), None)
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    log::info!("Database path reset to default");
    Ok(())
}
