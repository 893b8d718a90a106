use std::path::PathBuf;

use clap::Parser;

use bin_clock::settings::DEFAULT_SETTINGS_FILE;
use bin_clock::types::ClockMode;

/// Terminal binary clock: shows the time as colored nibble tiles.
#[derive(Parser, Debug, Clone)]
#[command(name = "bin-clock")]
#[command(version)]
#[command(about = "Binary clock that draws the time of day as colored tiles", long_about = None)]
pub struct Cli {
    /// Settings document to read
    #[arg(long, short, value_name = "FILE", env = "BIN_CLOCK_SETTINGS", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Time value to show: day (16-bit) or epoch (32-bit)
    #[arg(long, short, value_name = "MODE", env = "BIN_CLOCK_MODE", default_value = "day", value_parser = parse_mode)]
    pub mode: ClockMode,

    /// Start with this profile instead of the document's active one
    #[arg(long, short, value_name = "ID")]
    pub profile: Option<usize>,

    /// Pixels per terminal column
    #[arg(long, value_name = "PX", default_value_t = 4)]
    pub px_per_col: u16,

    /// Pixels per terminal row
    #[arg(long, value_name = "PX", default_value_t = 8)]
    pub px_per_row: u16,

    /// Write log output here instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<ClockMode, String> {
    ClockMode::from_str(s).ok_or_else(|| format!("unknown mode '{}' (expected day or epoch)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bin-clock"]).unwrap();
        assert_eq!(cli.settings, PathBuf::from(DEFAULT_SETTINGS_FILE));
        assert_eq!(cli.mode, ClockMode::Day);
        assert_eq!(cli.profile, None);
        assert_eq!((cli.px_per_col, cli.px_per_row), (4, 8));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "bin-clock",
            "--mode",
            "epoch",
            "--profile",
            "3",
            "--settings",
            "/tmp/clock.json",
            "--px-per-col",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.mode, ClockMode::Epoch);
        assert_eq!(cli.profile, Some(3));
        assert_eq!(cli.settings, PathBuf::from("/tmp/clock.json"));
        assert_eq!(cli.px_per_col, 2);
    }

    #[test]
    fn bad_mode_is_rejected() {
        assert!(Cli::try_parse_from(["bin-clock", "--mode", "week"]).is_err());
    }
}
