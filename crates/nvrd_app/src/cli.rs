use clap::Parser;

/// Read web novels one line at a time in the terminal
#[derive(Parser, Debug)]
#[command(name = "nvrd", version, about)]
pub struct Cli {
    /// Chapter URL, or path of a local text file
    #[arg(short, long, default_value = "")]
    pub read: String,

    /// Number of text lines shown at once
    #[arg(short = 'n', long, default_value_t = 1)]
    pub lines: usize,

    /// Wrap width in characters
    #[arg(short, long, default_value_t = 40)]
    pub width: usize,

    /// Write debug output to the log file
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn defaults_match_single_line_reading() {
        let cli = Cli::parse_from(["nvrd", "--read", "https://site.com/book/1.html"]);
        assert_eq!(cli.read, "https://site.com/book/1.html");
        assert_eq!(cli.lines, 1);
        assert_eq!(cli.width, 40);
        assert!(!cli.verbose);
    }

    #[test]
    fn short_flags_are_accepted() {
        let cli = Cli::parse_from(["nvrd", "-r", "novel.txt", "-n", "5", "-w", "60", "-v"]);
        assert_eq!(cli.read, "novel.txt");
        assert_eq!(cli.lines, 5);
        assert_eq!(cli.width, 60);
        assert!(cli.verbose);
    }

    #[test]
    fn missing_read_parses_as_empty() {
        let cli = Cli::parse_from(["nvrd"]);
        assert!(cli.read.is_empty());
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
