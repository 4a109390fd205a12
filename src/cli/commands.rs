//! Command implementations for the lexitrie CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::trie::{Trie, printer};

/// Seed words used when no dictionary file is given.
const DEFAULT_WORDS: &[&str] = &[
    "as", "astronaut", "asteroid", "are", "around", "cat", "cars", "cares", "careful",
    "carefully", "for", "follows", "forgot", "from", "front", "mellow", "mean", "money",
    "monday", "monster", "place", "plan", "planet", "planets", "plans", "the", "their",
    "they", "there", "towards",
];

/// Execute a CLI command.
pub fn execute_command(args: LexitrieArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_word(search_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_prefix(suggest_args.clone(), &args),
        Command::Spell(spell_args) => spell_word(spell_args.clone(), &args),
        Command::Delete(delete_args) => delete_word(delete_args.clone(), &args),
        Command::Words(words_args) => list_words(words_args.clone(), &args),
        Command::Tree(tree_args) => show_tree(tree_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
    }
}

/// Load the dictionary from a word list file, or fall back to the seed words.
fn load_dictionary(args: &DictionaryArgs) -> Result<Trie> {
    match &args.dictionary {
        Some(path) => load_word_file(path),
        None => Ok(Trie::from_words(DEFAULT_WORDS.iter().copied())),
    }
}

/// Read a word list with one word per line, skipping blank lines and
/// non-alphabetic tokens.
fn load_word_file(path: &Path) -> Result<Trie> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut trie = Trie::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) {
            trie.insert(word);
        }
    }

    debug!("loaded {} words from {}", trie.len(), path.display());
    Ok(trie)
}

/// Look up an exact word.
fn search_word(args: SearchArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let trie = load_dictionary(&args.dict)?;
    let found = trie.search(&args.word);

    let message = if found {
        format!("Found \"{}\" in dictionary", args.word)
    } else {
        format!("Did not find \"{}\" in dictionary", args.word)
    };

    output_result(
        &message,
        &SearchResult {
            word: args.word,
            found,
        },
        cli_args,
    )
}

/// Autocomplete words from a prefix.
fn suggest_prefix(args: SuggestArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let trie = load_dictionary(&args.dict)?;
    let suggestions = trie.auto_suggest(&args.prefix);

    let message = if suggestions.is_empty() {
        format!("No completions for \"{}\"", args.prefix)
    } else {
        format!(
            "{} completion(s) for \"{}\"",
            suggestions.len(),
            args.prefix
        )
    };

    output_result(
        &message,
        &SuggestResult {
            prefix: args.prefix,
            suggestions,
        },
        cli_args,
    )
}

/// Get spelling suggestions for a word.
fn spell_word(args: SpellArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let trie = load_dictionary(&args.dict)?;
    let suggestions = trie.spelling_suggestions(&args.word);

    let message = if suggestions.is_empty() {
        format!("No suggestions found for \"{}\"", args.word)
    } else {
        format!("Spelling suggestions for \"{}\"", args.word)
    };

    output_result(
        &message,
        &SpellResult {
            word: args.word,
            suggestions,
        },
        cli_args,
    )
}

/// Delete a word from the dictionary.
fn delete_word(args: DeleteArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let mut trie = load_dictionary(&args.dict)?;
    let removed = trie.delete(&args.word);

    let message = if removed {
        format!("Deleted \"{}\" from dictionary", args.word)
    } else {
        format!("Did not find \"{}\" in dictionary", args.word)
    };

    output_result(
        &message,
        &DeleteResult {
            word: args.word,
            removed,
            remaining_words: trie.len(),
        },
        cli_args,
    )
}

/// List every word in the dictionary.
fn list_words(args: WordsArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let trie = load_dictionary(&args.dict)?;
    let words = trie.all_words();

    let message = format!("The dictionary contains {} word(s)", words.len());
    output_result(
        &message,
        &WordsResult {
            count: words.len(),
            words,
        },
        cli_args,
    )
}

/// Print the dictionary's tree structure.
fn show_tree(args: TreeArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let trie = load_dictionary(&args.dict)?;
    let tree = printer::render_tree(&trie);

    let message = format!("Trie structure for {} word(s)", trie.len());
    output_result(
        &message,
        &TreeResult {
            word_count: trie.len(),
            tree,
        },
        cli_args,
    )
}

/// Run an interactive line-based session against one dictionary.
fn run_repl(args: ReplArgs, cli_args: &LexitrieArgs) -> Result<()> {
    let mut trie = load_dictionary(&args.dict)?;

    if cli_args.verbosity() > 0 {
        println!("lexitrie interactive session - {} word(s) loaded", trie.len());
        println!("commands: add <word>, search <word>, suggest <prefix>, spell <word>,");
        println!("          delete <word>, words, tree, quit");
    }

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let mut parts = input.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let argument = parts.next().unwrap_or("");

        if matches!(command, "add" | "search" | "suggest" | "spell" | "delete") && argument.is_empty()
        {
            println!("Usage: {command} <word>");
            continue;
        }

        match command {
            "quit" | "exit" => break,
            "add" => {
                if trie.insert(argument) {
                    println!("Added \"{argument}\"");
                } else {
                    println!("\"{argument}\" is already in the dictionary");
                }
            }
            "search" => {
                if trie.search(argument) {
                    println!("Found \"{argument}\" in dictionary");
                } else {
                    println!("Did not find \"{argument}\" in dictionary");
                }
            }
            "suggest" => {
                let suggestions = trie.auto_suggest(argument);
                if suggestions.is_empty() {
                    println!("No completions for \"{argument}\"");
                } else {
                    println!("{}", suggestions.join(", "));
                }
            }
            "spell" => {
                let suggestions = trie.spelling_suggestions(argument);
                if suggestions.is_empty() {
                    println!("No suggestions found for \"{argument}\"");
                } else {
                    println!("{}", suggestions.join(", "));
                }
            }
            "delete" => {
                if trie.delete(argument) {
                    println!("Deleted \"{argument}\" from dictionary");
                } else {
                    println!("Did not find \"{argument}\" in dictionary");
                }
            }
            "words" => {
                println!("{}", trie.all_words().join(", "));
            }
            "tree" => {
                print!("{}", printer::render_tree(&trie));
            }
            _ => println!("Unknown command: {command}"),
        }
    }

    Ok(())
}
