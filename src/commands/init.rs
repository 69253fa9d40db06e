use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{BuilderError, Result};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Project Builder Configuration");
    println!("=============================\n");

    let api_url = prompt("Enter the backend API URL (e.g., http://localhost:3000/api): ")?;
    if api_url.is_empty() {
        return Err(BuilderError::MissingApiUrl);
    }

    let base_url = prompt("Enter the routing base path [/]: ")?;

    let config = Config {
        api_url: Some(api_url),
        base_url: (!base_url.is_empty()).then_some(base_url),
    };
    write_config(&config_path, &config)?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now run 'project-builder open'!");

    Ok(())
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    let write_error = |source| BuilderError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    let contents = toml::to_string(config).map_err(|e| write_error(io::Error::other(e)))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    std::fs::write(path, contents).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_config_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            api_url: Some("http://localhost:3000/api".to_string()),
            base_url: None,
        };

        write_config(&path, &config).unwrap();

        let written: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, config);
    }

    #[test]
    fn test_write_failure_is_reported_as_write() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.toml");

        let err = write_config(&path, &Config::default()).unwrap_err();

        assert!(matches!(err, BuilderError::ConfigWrite { .. }));
        assert!(err.to_string().starts_with("Failed to write config file"), "{err}");
    }
}
