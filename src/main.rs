mod error;
mod output;
mod parser;
mod records;
mod report;
mod settings;
mod trigram;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use parser::{Diagnostic, SectionOutcome};
use records::{Fortune, HexagramCollection, HexagramRecord};
use settings::{Overrides, Settings};
use trigram::Trigram;

#[derive(Parser)]
#[command(name = "hexagram_parser", about = "Convert the 64-hexagram book (BOOK.md) to JSON")]
struct Cli {
    /// Input markdown book
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the book and write the JSON collection (default)
    Convert {
        /// Output JSON path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse the book and report completeness problems without writing
    Check,
    /// Print one parsed hexagram as JSON
    Show {
        /// Hexagram number (1-64)
        id: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Convert { output: None });
    let output_override = match &command {
        Commands::Convert { output } => output.clone(),
        _ => None,
    };
    let settings = Settings::load(Overrides {
        input: cli.input,
        output: output_override,
    })?;
    info!(?settings, "Starting hexagram parser");

    let result = match command {
        Commands::Convert { .. } => {
            let records = read_and_parse(&settings)?;
            println!("\n正在生成 JSON...");
            let count = records.len();
            output::write_collection(&settings.output, &HexagramCollection { hexagrams: records })?;
            info!(path = %settings.output.display(), count, "wrote collection");
            println!("✓ JSON 文件已生成: {}", settings.output.display());
            println!("✓ 共解析 {} 个卦象", count);
            Ok(())
        }
        Commands::Check => {
            let records = read_and_parse(&settings)?;
            let findings = report::check_collection(&records, settings.expected_count);
            println!("\n--- Lower trigrams ---");
            for (t, n) in report::lower_trigram_counts(&records) {
                println!("  {}{} ({}): {}", t.name(), t.glyph(), t.nature(), n);
            }
            println!("\n--- Fortune ---");
            for fortune in [
                Fortune::GreatFortune,
                Fortune::Fortune,
                Fortune::Misfortune,
                Fortune::Neutral,
            ] {
                let n = records.iter().filter(|r| r.fortune == fortune).count();
                println!("  {}: {}", fortune.label(), n);
            }
            if findings.is_empty() {
                println!("\nNo problems found in {} hexagrams.", records.len());
            } else {
                println!("\n--- Findings ({}) ---", findings.len());
                for f in &findings {
                    println!("  - {}", f);
                }
            }
            Ok(())
        }
        Commands::Show { id } => {
            let content = read_book(&settings)?;
            let (records, _) = parser::partition(parser::parse_document(&content));
            let Some(record) = records.iter().find(|r| r.id == id) else {
                bail!("第 {} 卦 not found in {}", id, settings.input.display());
            };
            print_summary(record);
            println!("{}", serde_json::to_string_pretty(record)?);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn read_book(settings: &Settings) -> anyhow::Result<String> {
    if !settings.input.exists() {
        println!("错误：{} 文件不存在！", settings.input.display());
        bail!("input file {} does not exist", settings.input.display());
    }
    println!("正在读取 {}...", settings.input.display());
    std::fs::read_to_string(&settings.input)
        .with_context(|| format!("reading {}", settings.input.display()))
}

/// Read the book, parse every section and print per-section progress.
fn read_and_parse(settings: &Settings) -> anyhow::Result<Vec<HexagramRecord>> {
    let content = read_book(settings)?;

    println!("正在解析...");
    let sections = parser::sections::split_sections(&content);
    info!(path = %settings.input.display(), sections = sections.len(), "segmented book");
    println!("找到 {} 个卦象", sections.len());

    let outcomes = process_sections(&sections);
    for outcome in &outcomes {
        if let SectionOutcome::Parsed { record, .. } = outcome {
            println!(
                "  ✓ 第 {} 卦: {} ({} 爻)",
                record.id,
                record.name,
                record.yaos.len()
            );
        }
    }

    let (records, diagnostics) = parser::partition(outcomes);
    for d in &diagnostics {
        match d {
            Diagnostic::Skipped { index, reason } => {
                println!("  ✗ 解析第 {} 卦时出错: {}", index + 1, reason)
            }
            Diagnostic::Warning { index, warning } => {
                println!("  ! 第 {} 段: {}", index + 1, warning)
            }
        }
    }
    Ok(records)
}

fn process_sections(sections: &[String]) -> Vec<SectionOutcome> {
    use indicatif::{ProgressBar, ProgressStyle};

    const CHUNK: usize = 16;

    let pb = ProgressBar::new(sections.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut outcomes = Vec::with_capacity(sections.len());
    for (n, chunk) in sections.chunks(CHUNK).enumerate() {
        outcomes.extend(parser::parse_sections(n * CHUNK, chunk));
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    outcomes
}

fn print_summary(record: &HexagramRecord) {
    let describe = |name: &str| match Trigram::from_name(name) {
        Some(t) => format!("{}{} {}", t.name(), t.glyph(), t.nature()),
        None => name.to_string(),
    };
    println!(
        "第 {} 卦 {} {} | 上{} 下{} | {} | {}",
        record.id,
        record.name,
        record.unicode,
        describe(&record.upper_trigram),
        describe(&record.lower_trigram),
        record.lines,
        record.fortune.label()
    );
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
