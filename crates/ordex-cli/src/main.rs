use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ordex_core::{BPlusTree, InsertResult};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Parser)]
#[command(name = "ordex")]
#[command(about = "ordex ordered-index command-line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session against a fresh in-memory tree
    Repl {
        /// Maximum keys per node before a split
        #[arg(short, long, default_value_t = 4)]
        order: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Repl { order } => run_repl(order),
    }
}

fn run_repl(order: usize) -> Result<()> {
    let mut tree: BPlusTree<i64, String> =
        BPlusTree::new(order).context("Failed to create tree")?;

    let mut rl = DefaultEditor::new()?;

    println!("ordex REPL (order = {})", order);
    println!("Commands: insert <key> [value], get <key>, remove <key>, range <start> <end>, dump, len, quit");
    println!();

    loop {
        let readline = rl.readline("ordex> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                if line == "quit" || line == "exit" {
                    break;
                }

                if let Err(e) = handle_command(&mut tree, line) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn handle_command(tree: &mut BPlusTree<i64, String>, line: &str) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        ["insert", key, rest @ ..] => {
            let key = parse_key(key)?;
            let value = if rest.is_empty() {
                key.to_string()
            } else {
                rest.join(" ")
            };
            match tree.insert(key, value) {
                InsertResult::Inserted => println!("OK"),
                InsertResult::DuplicateIgnored => println!("Duplicate key {} ignored", key),
            }
        }
        ["get", key] => {
            let key = parse_key(key)?;
            match tree.get(&key) {
                Some(value) => println!("{}", value),
                None => println!("Not found"),
            }
        }
        ["remove", key] => {
            let key = parse_key(key)?;
            match tree.remove(&key) {
                Some(value) => println!("Deleted {}", value),
                None => println!("Not found"),
            }
        }
        ["range", start, end] => {
            let start = parse_key(start)?;
            let end = parse_key(end)?;
            let mut count = 0;
            for (key, value) in tree.range(&start, &end) {
                println!("{} => {}", key, value);
                count += 1;
            }
            println!("({} keys)", count);
        }
        ["dump"] => {
            for (depth, keys) in tree.dump() {
                println!("{}Node(keys={:?})", "  ".repeat(depth), keys);
            }
        }
        ["len"] => println!("{}", tree.len()),
        ["help"] => {
            println!("insert <key> [value]  add a key (value defaults to the key)");
            println!("get <key>             look up a key");
            println!("remove <key>          delete a key");
            println!("range <start> <end>   scan keys in [start, end]");
            println!("dump                  print the node structure");
            println!("len                   number of keys");
            println!("quit                  exit");
        }
        _ => bail!("Unknown command: {}", line),
    }

    Ok(())
}

fn parse_key(raw: &str) -> Result<i64> {
    raw.parse()
        .with_context(|| format!("'{}' is not an integer key", raw))
}
