//! Insert keys into a fresh tree, dump it, and answer lookups.
//!
//! ```text
//! btree-demo 29 41 44 62 46 49 27 76 --lookup 100 --lookup 44
//! ```
//! Set `RUST_LOG=arena_btree=debug` to watch splits as they happen.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arena_btree::{BTree, Key};

#[derive(Parser, Debug)]
#[command(name = "btree-demo", about = "Build a B-tree from keys and print its structure")]
struct Cli {
    /// Keys to insert, in order.
    #[arg(value_name = "KEY", allow_negative_numbers = true)]
    keys: Vec<Key>,

    /// Key to look up after all inserts (repeatable).
    #[arg(long = "lookup", value_name = "KEY", allow_negative_numbers = true)]
    lookups: Vec<Key>,

    /// Skip the structure dump.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let mut tree = BTree::new();
    for &key in &cli.keys {
        tree.insert(key);
    }

    if !cli.quiet {
        if let Err(err) = tree.display_to(std::io::stdout().lock()) {
            tracing::error!(%err, "failed to print tree");
            std::process::exit(1);
        }
    }

    for key in cli.lookups {
        println!("lookup {}: {}", key, tree.lookup(key));
    }

    println!("count: {}, height: {}", tree.count(), tree.height());
    tree.emit_tracing();

    if let Err(err) = tree.verify() {
        tracing::error!(%err, "tree failed verification");
        std::process::exit(1);
    }
}
