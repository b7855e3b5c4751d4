//! hangul-glyph - 한글 → 기호 변환 CLI

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use hangul_glyph::config::{load_config, load_config_from, save_config, save_config_to, GlyphConfig};
use hangul_glyph::{encode, mapping_table, EncodeOptions};

#[derive(Parser)]
#[command(name = "hangul-glyph", about = "Encode Hangul syllables as substitution glyphs")]
struct Cli {
    /// Text to encode (reads stdin line by line when omitted)
    text: Vec<String>,

    /// Append this separator after every character
    #[arg(short, long, conflicts_with = "no_separator")]
    separator: Option<char>,

    /// Disable the separator even if the config enables it
    #[arg(long)]
    no_separator: bool,

    /// Read settings from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the jamo to symbol table
    #[arg(long)]
    table: bool,

    /// Print the table as JSON (with --table)
    #[arg(long, requires = "table")]
    json: bool,

    /// Persist the effective separator settings to the config file
    #[arg(long)]
    save: bool,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("hangul-glyph: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.table {
        let table = mapping_table();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&table)?);
        } else {
            print!("{}", table.to_text());
        }
        return Ok(());
    }

    // 설정 파일 → 명령행 옵션 순으로 적용
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    let options = effective_options(&config, &cli);

    if cli.save {
        let updated = GlyphConfig::from(&options);
        match &cli.config {
            Some(path) => save_config_to(path, &updated)?,
            None => save_config(&updated)?,
        }
        log::info!("설정 저장 완료");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        writeln!(out, "{}", encode(&cli.text.join(" "), &options))?;
        return Ok(());
    }

    if cli.save {
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        writeln!(out, "{}", encode(&line?, &options))?;
    }
    Ok(())
}

fn effective_options(config: &GlyphConfig, cli: &Cli) -> EncodeOptions {
    let mut options = config.encode_options();
    if let Some(separator) = cli.separator {
        options = options.with_separator(separator);
    }
    if cli.no_separator {
        options.use_separator = false;
    }
    options
}
