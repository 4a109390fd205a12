//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexitrieArgs, OutputFormat};
use crate::error::Result;

/// Result structure for exact word lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub word: String,
    pub found: bool,
}

/// Result structure for prefix autocomplete.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub prefix: String,
    pub suggestions: Vec<String>,
}

/// Result structure for spelling suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellResult {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Result structure for word deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResult {
    pub word: String,
    pub removed: bool,
    pub remaining_words: usize,
}

/// Result structure for listing all words.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResult {
    pub count: usize,
    pub words: Vec<String>,
}

/// Result structure for tree rendering.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeResult {
    pub word_count: usize,
    pub tree: String,
}

/// Output a command result in the configured format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexitrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexitrieArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;
    output_generic_human(&value);
    Ok(())
}

/// Print the fields of a result object, one per line; list and multi-line
/// fields get their items indented beneath the field name.
fn output_generic_human(value: &serde_json::Value) {
    let Some(obj) = value.as_object() else {
        println!("{}", format_value(value));
        return;
    };

    for (key, val) in obj {
        match val {
            serde_json::Value::Array(items) => {
                println!("{key}:");
                for item in items {
                    println!("  {}", format_value(item));
                }
            }
            serde_json::Value::String(s) if s.contains('\n') => {
                println!("{key}:");
                for line in s.lines() {
                    println!("  {line}");
                }
            }
            _ => println!("{key}: {}", format_value(val)),
        }
    }
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexitrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
