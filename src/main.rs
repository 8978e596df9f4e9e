use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ydict_reader::{Config, Dictionary, RenderMode};

#[derive(Parser)]
#[command(name = "ydict-reader")]
#[command(about = "Look up words in a YDP .idx/.dat dictionary", long_about = None)]
struct Cli {
    /// Path to the .idx word table
    idx: PathBuf,

    /// Path to the .dat definition file
    dat: PathBuf,

    /// Word to look up
    word: Option<String>,

    /// How to print the definition
    #[arg(short, long, value_enum, default_value_t = Mode::Pretty)]
    mode: Mode,

    /// Maximum number of suggestions for unknown words
    #[arg(short, long, default_value_t = 15)]
    limit: usize,

    /// Print the first N entries of the word table
    #[arg(long, value_name = "N")]
    list: Option<usize>,

    /// Write the word table to this file as index/offset/word lines
    #[arg(long, value_name = "PATH")]
    dump_idx: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Pretty,
    Plain,
    Raw,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::new(&cli.idx, &cli.dat);
    if let Some(path) = &cli.dump_idx {
        config = config.with_idx_dump(path);
    }

    let dict = Dictionary::open(&config)
        .with_context(|| format!("failed to open dictionary {}", cli.idx.display()))?;
    println!("{}", dict.version());

    let status = dict.idx_dump_status();
    if status.requested {
        let outcome = if status.ok { "written" } else { "FAILED" };
        println!("Word table dump {}: {}", outcome, status.path.display());
    }

    if let Some(n) = cli.list {
        for (i, entry) in dict.words().iter().take(n).enumerate() {
            println!("  [{}] offset={} word=\"{}\"", i, entry.data_offset, entry.word);
        }
    }

    let Some(word) = cli.word else {
        return Ok(ExitCode::SUCCESS);
    };

    let Some(index) = dict.find_word(&word) else {
        println!("\"{}\" not found.", word);
        let suggestions = dict.suggest(&word, cli.limit);
        if !suggestions.is_empty() {
            println!("Did you mean:");
            for i in suggestions {
                if let Some(entry) = dict.word_at(i) {
                    println!("  {}", entry.word);
                }
            }
        }
        return Ok(ExitCode::FAILURE);
    };

    let text = match cli.mode {
        Mode::Pretty => dict.render_best(index),
        Mode::Plain => dict.render(index, RenderMode::Plain),
        Mode::Raw => String::from_utf8_lossy(&dict.read_raw_markup(index)).into_owned(),
    };
    if text.is_empty() {
        println!("No definition available for \"{}\".", word);
        return Ok(ExitCode::FAILURE);
    }
    println!("{}", text.trim_end());
    Ok(ExitCode::SUCCESS)
}
