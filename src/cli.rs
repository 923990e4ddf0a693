use std::path::PathBuf;

use clap::Parser;
use restaurant_browser::Cuisine;

/// Browse restaurants in the terminal, filtered by search text and cuisine.
#[derive(Debug, Parser)]
#[command(name = "restaurant-browser", version, about)]
pub struct Cli {
    /// Color theme: light, dark or terminal
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Render in the normal screen buffer instead of the alternate screen
    #[arg(long)]
    pub inline: bool,

    /// Print the current view once and exit
    #[arg(long)]
    pub once: bool,

    /// Initial search text
    #[arg(long, default_value = "")]
    pub search: String,

    /// Initial cuisine: All, Indian, Chinese, Italian or Japanese
    #[arg(long, default_value = "All")]
    pub cuisine: Cuisine,

    /// Write logs to this file; filtered by RUST_LOG (default: info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["restaurant-browser"]);
        assert_eq!(cli.theme, "light");
        assert!(!cli.inline);
        assert!(!cli.once);
        assert_eq!(cli.search, "");
        assert_eq!(cli.cuisine, Cuisine::All);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_initial_state_flags() {
        let cli = Cli::parse_from([
            "restaurant-browser",
            "--search",
            "pizza",
            "--cuisine",
            "italian",
            "--theme",
            "dark",
            "--once",
        ]);
        assert_eq!(cli.search, "pizza");
        assert_eq!(cli.cuisine, Cuisine::Italian);
        assert_eq!(cli.theme, "dark");
        assert!(cli.once);
    }

    #[test]
    fn test_unknown_cuisine_rejected() {
        assert!(Cli::try_parse_from(["restaurant-browser", "--cuisine", "mexican"]).is_err());
    }
}
