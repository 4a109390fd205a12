//! Command line argument parsing for the lexitrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Lexitrie - a trie-backed dictionary with autocomplete and spelling suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "lexitrie")]
#[command(about = "A trie-backed dictionary with autocomplete and spelling suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexitrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexitrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up an exact word
    Search(SearchArgs),

    /// Autocomplete words from a prefix
    Suggest(SuggestArgs),

    /// Get spelling suggestions for a word
    Spell(SpellArgs),

    /// Delete a word from the dictionary
    Delete(DeleteArgs),

    /// List every word in the dictionary
    Words(WordsArgs),

    /// Print the dictionary's tree structure
    Tree(TreeArgs),

    /// Run an interactive session
    Repl(ReplArgs),
}

/// Dictionary source shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Word list file with one word per line; a built-in list is used if omitted
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}

/// Arguments for exact word lookup
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// The word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub dict: DictionaryArgs,
}

/// Arguments for prefix autocomplete
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    #[command(flatten)]
    pub dict: DictionaryArgs,
}

/// Arguments for spelling suggestions
#[derive(Parser, Debug, Clone)]
pub struct SpellArgs {
    /// The possibly misspelled word
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub dict: DictionaryArgs,
}

/// Arguments for word deletion
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// The word to delete
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub dict: DictionaryArgs,
}

/// Arguments for listing all words
#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    #[command(flatten)]
    pub dict: DictionaryArgs,
}

/// Arguments for printing the tree structure
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    #[command(flatten)]
    pub dict: DictionaryArgs,
}

/// Arguments for the interactive session
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    #[command(flatten)]
    pub dict: DictionaryArgs,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_defaults_to_normal() {
        let args = LexitrieArgs::parse_from(["lexitrie", "search", "cat"]);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = LexitrieArgs::parse_from(["lexitrie", "-q", "-vv", "search", "cat"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_dictionary_flag_is_optional() {
        let args = LexitrieArgs::parse_from(["lexitrie", "suggest", "ca"]);
        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.prefix, "ca");
                assert!(suggest.dict.dictionary.is_none());
            }
            _ => panic!("Expected suggest command"),
        }
    }

    #[test]
    fn test_json_format_flag() {
        let args = LexitrieArgs::parse_from(["lexitrie", "-f", "json", "words"]);
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
