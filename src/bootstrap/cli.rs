use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "gym-onboarding",
    version,
    about = "Sign up for a gym membership from the terminal"
)]
pub struct Cli {
    /// Config file to load (takes precedence over GYM_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for saved wizard state and the session token
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep storage in memory; nothing survives the process
    #[arg(long)]
    pub ephemeral: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "gym-onboarding",
            "--config",
            "/etc/gym.toml",
            "--data-dir",
            "/var/lib/gym",
            "--ephemeral",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("/etc/gym.toml")));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/var/lib/gym")));
        assert!(cli.ephemeral);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::parse_from(["gym-onboarding"]);

        assert!(cli.config.is_none());
        assert!(cli.data_dir.is_none());
        assert!(!cli.ephemeral);
    }
}
