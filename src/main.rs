use std::path::PathBuf;
use std::process;

use alquran_reader::{Passage, QueryTarget, QuranReader, SettingsLoader, SurahMeta};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Look up surahs, ayahs and tafsir in an Al-Qur'an JSON corpus.
///
/// Examples: `alquran 2:255`, `alquran 2 1-5`, `alquran baqa 1-5`, `alquran yasin`, `alquran list`
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query words, e.g. `103`, `2:255`, `al kahfi 10`
    #[arg(value_name = "QUERY")]
    query: Vec<String>,

    /// Corpus directory containing ListQuran.json and alquran/
    #[arg(long, short = 'd')]
    base_dir: Option<PathBuf>,

    /// Settings file (TOML) layered over the built-in defaults
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Tafsir source, e.g. kemenag_ringkas, ibnu_katsir, jalalain
    #[arg(long, short = 't')]
    tafsir: Option<String>,

    /// List every surah in the index
    #[arg(long)]
    list: bool,

    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> alquran_reader::Result<()> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Some(dir) = &cli.base_dir {
        loader = loader.with_base_dir(dir)?;
    }
    let settings = loader.build()?;
    let reader = QuranReader::open(&settings)?;

    let target = if cli.list {
        QueryTarget::List
    } else {
        QueryTarget::parse(&cli.query.join(" "))?
    };

    match target {
        QueryTarget::List => print_list(reader.surahs(), cli.format),
        QueryTarget::Surah { surah, ayahs } => {
            let passage = reader.passage(&surah, ayahs.as_deref(), cli.tafsir.as_deref())?;
            print_passage(&passage, cli.format)
        }
    }
}

fn print_list(surahs: &[SurahMeta], format: OutputFormat) -> alquran_reader::Result<()> {
    match format {
        OutputFormat::Json => print_json(&surahs)?,
        OutputFormat::Text => {
            println!("Total surahs: {}", surahs.len());
            for surah in surahs {
                let ayahs = surah
                    .number_of_ayahs
                    .map(|n| format!("{} ayahs", n))
                    .unwrap_or_default();
                println!("  {:>3}. {:<24} {}", surah.number, surah.display_name(), ayahs);
            }
        }
    }
    Ok(())
}

fn print_passage(passage: &Passage, format: OutputFormat) -> alquran_reader::Result<()> {
    if format == OutputFormat::Json {
        return print_json(passage);
    }

    println!(
        "{} ({}) : {}",
        passage.surah.display_name(),
        passage.surah.number,
        passage.range
    );
    if let Some(found) = &passage.name_match {
        println!("  matched '{}' with rating {:.3}", found.input, found.best.rating);
    }
    if passage.fallback {
        println!("  requested ayah not found, showing the first ayah");
    }
    println!("{}", "=".repeat(60));

    for ayah in &passage.ayahs {
        let label = ayah.index.map(|i| i.to_string()).unwrap_or_else(|| "?".to_string());
        println!("\n[{}] {}", label, ayah.arb);
        if let Some(translation) = &ayah.translation {
            println!("  {}", translation);
        }
        match &ayah.tafsir {
            Some(text) => println!("  Tafsir ({}): {}", passage.tafsir_source, text),
            None => println!("  Tafsir ({}): (no tafsir)", passage.tafsir_source),
        }
        if let Some(url) = &ayah.audio_url {
            println!("  Audio: {}", url);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> alquran_reader::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
