use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "warehouse", version)]
#[command(about = "Interactive inventory and order manager", long_about = None)]
pub struct Cli {
    /// Directory holding the snapshot and config.json
    #[arg(long, env = "WAREHOUSE_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_flags() {
        let cli = Cli::try_parse_from(["warehouse"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn accepts_data_dir_and_verbose() {
        let cli = Cli::try_parse_from(["warehouse", "--data-dir", "/tmp/wh", "-v"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/wh")));
        assert!(cli.verbose);
    }
}
