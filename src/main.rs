// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use sufarray::{
    verify_brute_force, verify_index, BruteForceSuffixArray, Engine, PrefixDoublingSuffixArray,
    SuffixArrayError, Symbol, SymbolIndex, SymbolKind, Symbols, VerificationReport,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, InputArgs};

/// Inputs at least this long get a build spinner on a TTY.
#[cfg(feature = "parallel")]
const SPINNER_THRESHOLD: usize = 1 << 18;

/// Symbols of context shown on each side of a match.
const CHAR_CONTEXT: usize = 16;
const ITEM_CONTEXT: usize = 3;

/// Run `$body` with `$text` bound to the sequence as a typed slice.
macro_rules! on_symbols {
    ($symbols:expr, |$text:ident| $body:expr) => {
        match $symbols {
            Symbols::Chars(s) => {
                let $text = s.as_slice();
                $body
            }
            Symbols::Integers(s) => {
                let $text = s.as_slice();
                $body
            }
            Symbols::Tokens(s) => {
                let $text = s.as_slice();
                $body
            }
        }
    };
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Build { input } => run_build(&input),
        Commands::Search {
            input,
            pattern,
            sorted,
            limit,
        } => run_search(&input, &pattern, sorted, limit),
        Commands::Verify { input } => run_verify(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════════

fn read_input(path: &Path) -> Result<String> {
    let mut raw = String::new();
    if path == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read stdin")?;
    } else {
        raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(raw)
}

/// Load the text to index. A single trailing newline of a plain-text file
/// is not part of the text.
fn load_symbols(args: &InputArgs) -> Result<Symbols> {
    let raw = read_input(&args.input)?;
    if args.json_input {
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
        let symbols = Symbols::from_json(&value)
            .with_context(|| format!("cannot index {}", args.input.display()))?;
        Ok(symbols)
    } else {
        let text = raw
            .strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(&raw);
        Ok(Symbols::from_text(text))
    }
}

fn parse_pattern(args: &InputArgs, pattern: &str) -> Result<Symbols> {
    if args.json_input {
        let value: serde_json::Value =
            serde_json::from_str(pattern).context("pattern is not valid JSON")?;
        Symbols::from_json(&value).context("invalid pattern")
    } else {
        Ok(Symbols::from_text(pattern))
    }
}

/// Spinner on stderr while a large input builds.
struct Progress {
    #[cfg(feature = "parallel")]
    bar: Option<ProgressBar>,
}

impl Progress {
    fn start(message: &str, symbols: usize) -> Self {
        #[cfg(feature = "parallel")]
        {
            let bar = (symbols >= SPINNER_THRESHOLD && atty::is(atty::Stream::Stderr)).then(|| {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed}")
                {
                    bar.set_style(style);
                }
                bar.set_message(format!("{} ({} symbols)", message, format_count(symbols)));
                bar.enable_steady_tick(std::time::Duration::from_millis(80));
                bar
            });
            Progress { bar }
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = (message, symbols);
            Progress {}
        }
    }

    fn finish(self) {
        #[cfg(feature = "parallel")]
        {
            if let Some(bar) = self.bar {
                bar.finish_and_clear();
            }
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

// ═══════════════════════════════════════════════════════════════════════════
// BUILD
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct BuildReport {
    engine: Engine,
    kind: SymbolKind,
    symbols: usize,
    distinct_symbols: usize,
    /// Prefix-doubling only.
    rounds: Option<usize>,
    /// Prefix-doubling only.
    max_lcp: Option<usize>,
    build_ms: f64,
}

fn build_report<T: Symbol>(engine: Engine, kind: SymbolKind, text: &[T]) -> BuildReport {
    let distinct_symbols = text.iter().collect::<BTreeSet<_>>().len();
    let start = Instant::now();
    let (rounds, max_lcp) = match engine {
        Engine::BruteForce => {
            let _index = BruteForceSuffixArray::new(text);
            (None, None)
        }
        Engine::PrefixDoubling => {
            let index = PrefixDoublingSuffixArray::new(text);
            (
                Some(index.rounds()),
                Some(index.lcp().iter().copied().max().unwrap_or(0)),
            )
        }
    };
    BuildReport {
        engine,
        kind,
        symbols: text.len(),
        distinct_symbols,
        rounds,
        max_lcp,
        build_ms: elapsed_ms(start),
    }
}

fn run_build(args: &InputArgs) -> Result<()> {
    let symbols = load_symbols(args)?;
    let kind = symbols.kind();

    let progress = Progress::start("building suffix array", symbols.len());
    let report = on_symbols!(&symbols, |text| build_report(args.engine, kind, text));
    progress.finish();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section_top("BUILD");
    field("engine", &engine_badge(report.engine.name()));
    field(
        "symbols",
        &format!("{} {}", format_count(report.symbols), report.kind),
    );
    field("distinct", &format_count(report.distinct_symbols));
    if let Some(rounds) = report.rounds {
        field("doubling rounds", &rounds.to_string());
    }
    if let Some(max_lcp) = report.max_lcp {
        field("longest repeat", &format_count(max_lcp));
    }
    field("build time", &timing_ms(report.build_ms));
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct SearchReport {
    engine: Engine,
    kind: SymbolKind,
    pattern: String,
    /// Occurrences before `--limit` was applied.
    total: usize,
    /// "suffix" or "text".
    order: &'static str,
    positions: Vec<usize>,
    truncated: bool,
    query_ms: f64,
}

fn run_search(args: &InputArgs, pattern: &str, sorted: bool, limit: usize) -> Result<()> {
    let text = load_symbols(args)?;
    let pattern = parse_pattern(args, pattern)?;

    let progress = Progress::start("building suffix array", text.len());
    let index = SymbolIndex::build(args.engine, &text);
    progress.finish();
    log::debug!("built {:?}", index);

    let start = Instant::now();
    let matches = index
        .find_all(&pattern)
        .with_context(|| format!("cannot search {} text", index.kind()))?;
    let mut positions: Vec<usize> = if sorted {
        matches.into_sorted()
    } else {
        matches.collect()
    };
    let query_ms = elapsed_ms(start);

    let total = positions.len();
    positions.truncate(limit);
    let report = SearchReport {
        engine: index.engine(),
        kind: index.kind(),
        pattern: pattern.preview(),
        total,
        order: if sorted { "text" } else { "suffix" },
        truncated: positions.len() < total,
        positions,
        query_ms,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section_top("SEARCH");
    field("engine", &engine_badge(report.engine.name()));
    field("pattern", &report.pattern);
    field("occurrences", &format_count(report.total));
    field("query time", &timing_ms(report.query_ms));
    if !report.positions.is_empty() {
        section_mid(&format!("POSITIONS ({} order)", report.order));
        for &pos in &report.positions {
            let context = snippet(&text, pos, pattern.len());
            row(&format!("{}  {}", pad_left(&pos.to_string(), 8), context));
        }
        if report.truncated {
            row(&themed(
                GRAY,
                &[],
                &format!(
                    "… {} more (raise --limit)",
                    format_count(report.total - report.positions.len())
                ),
            ));
        }
    }
    section_bot();
    Ok(())
}

/// The match at `pos` with a little surrounding context.
fn snippet(text: &Symbols, pos: usize, len: usize) -> String {
    match text {
        Symbols::Chars(chars) => context_window(chars, pos, len, CHAR_CONTEXT, |part| {
            part.iter()
                .map(|&c| if c.is_control() { ' ' } else { c })
                .collect()
        }),
        Symbols::Integers(ints) => context_window(ints, pos, len, ITEM_CONTEXT, |part| {
            join_items(part.iter().map(|i| i.to_string()))
        }),
        Symbols::Tokens(tokens) => context_window(tokens, pos, len, ITEM_CONTEXT, |part| {
            join_items(part.iter().cloned())
        }),
    }
}

fn context_window<T>(
    items: &[T],
    pos: usize,
    len: usize,
    context: usize,
    render: impl Fn(&[T]) -> String,
) -> String {
    let pos = pos.min(items.len());
    let end = (pos + len).min(items.len());
    let from = pos.saturating_sub(context);
    let to = (end + context).min(items.len());
    highlight(
        &render(&items[from..pos]),
        &render(&items[pos..end]),
        &render(&items[end..to]),
    )
}

fn join_items(items: impl Iterator<Item = String>) -> String {
    let parts: Vec<String> = items.collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" {} ", parts.join(" "))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// VERIFY
// ═══════════════════════════════════════════════════════════════════════════

fn verify_with<T: Symbol>(
    engine: Engine,
    text: &[T],
) -> Result<VerificationReport, SuffixArrayError> {
    let report = match engine {
        Engine::BruteForce => verify_brute_force(&BruteForceSuffixArray::new(text))?,
        Engine::PrefixDoubling => verify_index(&PrefixDoublingSuffixArray::new(text))?,
    };
    Ok(report)
}

fn run_verify(args: &InputArgs) -> Result<()> {
    let symbols = load_symbols(args)?;

    let progress = Progress::start("building and verifying", symbols.len());
    let verified = on_symbols!(&symbols, |text| verify_with(args.engine, text));
    progress.finish();
    let report = verified.with_context(|| format!("{} index failed verification", args.engine))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section_top("VERIFY");
    field("engine", &engine_badge(args.engine.name()));
    field(
        "symbols",
        &format!("{} {}", format_count(report.text_len), symbols.kind()),
    );
    if args.engine == Engine::PrefixDoubling {
        field("doubling rounds", &report.rounds.to_string());
    }
    field("longest repeat", &format_count(report.max_lcp));
    section_mid("CHECKS");
    for check in &report.checks {
        row(&format!("{}{}", pad_right(check, 20), status(true)));
    }
    section_bot();
    Ok(())
}
