use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::time::Instant;

use bwt_fm::index::{bwt, fm};
use bwt_fm::util::{matrix, text};
use bwt_fm::Symbol;

#[derive(Parser, Debug)]
#[command(name = "bwt-fm", author, version, about = "Burrows-Wheeler transform and FM-index tables", arg_required_else_help = true)]
struct Cli {
    /// Print input statistics and timings to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Input {
    /// Input text (omit when using --file)
    text: Option<String>,
    /// Read input from a file instead
    #[arg(short, long, conflicts_with = "text")]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the suffix array of the sentinel-terminated input
    Sa {
        #[command(flatten)]
        input: Input,
    },
    /// Print the BWT column of the input
    Bwt {
        #[command(flatten)]
        input: Input,
        /// Character used to display the sentinel
        #[arg(short, long, default_value_t = '$')]
        sentinel: char,
    },
    /// Invert a BWT column back to the original text
    Unbwt {
        #[command(flatten)]
        input: Input,
        /// Character that marks the sentinel in the column
        #[arg(short, long, default_value_t = '$')]
        sentinel: char,
    },
    /// Build the FM-index tables (C and Occ) of the input's BWT
    Fm {
        #[command(flatten)]
        input: Input,
        /// Emit JSON instead of a plain listing
        #[arg(long)]
        json: bool,
    },
    /// Recover the first Occ group's symbols from the FM-index
    Extract {
        #[command(flatten)]
        input: Input,
    },
    /// Print the sorted rotation matrix of the sentinel-terminated input
    Matrix {
        #[command(flatten)]
        input: Input,
        #[arg(short, long, default_value_t = '$')]
        sentinel: char,
    },
}

/// 运行选项
#[derive(Debug, Clone, Copy)]
struct RunOpt {
    verbose: bool,
    sentinel: char,
}

#[derive(Serialize)]
struct IndexMeta {
    source: String,
    build_args: String,
    build_timestamp: String,
}

#[derive(Serialize)]
struct FmReport<'a> {
    meta: IndexMeta,
    index: &'a fm::FMIndex<char>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base = RunOpt { verbose: cli.verbose, sentinel: '$' };
    match cli.command {
        Commands::Sa { input } => run_sa(&input, base),
        Commands::Bwt { input, sentinel } => run_bwt(&input, RunOpt { sentinel, ..base }),
        Commands::Unbwt { input, sentinel } => run_unbwt(&input, RunOpt { sentinel, ..base }),
        Commands::Fm { input, json } => run_fm(&input, json, base),
        Commands::Extract { input } => run_extract(&input, base),
        Commands::Matrix { input, sentinel } => run_matrix(&input, RunOpt { sentinel, ..base }),
    }
}

fn read_input(input: &Input) -> Result<(String, String)> {
    match (&input.text, &input.file) {
        (_, Some(path)) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read input file '{}'", path))?;
            // 文件末尾的换行不属于输入
            Ok((path.clone(), s.trim_end_matches(&['\n', '\r'][..]).to_string()))
        }
        (Some(t), None) => Ok(("<arg>".to_string(), t.clone())),
        (None, None) => anyhow::bail!("no input given: pass TEXT or --file <path>"),
    }
}

fn report(opt: RunOpt, what: &str, chars: &[char], started: Instant) {
    if opt.verbose {
        let mut distinct = chars.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        eprintln!("{}: length={} distinct={} elapsed={:?}", what, chars.len(), distinct.len(), started.elapsed());
    }
}

fn run_sa(input: &Input, opt: RunOpt) -> Result<()> {
    let (_, s) = read_input(input)?;
    let chars: Vec<char> = s.chars().collect();
    let started = Instant::now();
    let sa = bwt::suffix_array_of(&chars);
    report(opt, "sa", &chars, started);
    let line: Vec<String> = sa.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));
    Ok(())
}

fn run_bwt(input: &Input, opt: RunOpt) -> Result<()> {
    let (_, s) = read_input(input)?;
    text::ensure_no_sentinel(&s, opt.sentinel)?;
    let chars: Vec<char> = s.chars().collect();
    let started = Instant::now();
    let sa = bwt::suffix_array_of(&chars);
    let column = bwt::build_bwt(&chars, &sa)?;
    report(opt, "bwt", &chars, started);
    println!("{}", text::render_column(&column, opt.sentinel));
    Ok(())
}

fn run_unbwt(input: &Input, opt: RunOpt) -> Result<()> {
    let (_, s) = read_input(input)?;
    let column = text::parse_column(&s, opt.sentinel);
    let started = Instant::now();
    let out = text::bwt_to_text(&column).context("cannot invert BWT column")?;
    let chars: Vec<char> = out.chars().collect();
    report(opt, "unbwt", &chars, started);
    println!("{}", out);
    Ok(())
}

fn build_index(chars: &[char]) -> fm::FMIndex<char> {
    fm::FMIndex::build(&bwt::forward(chars))
}

fn run_fm(input: &Input, json: bool, opt: RunOpt) -> Result<()> {
    let (source, s) = read_input(input)?;
    text::ensure_no_sentinel(&s, opt.sentinel)?;
    let chars: Vec<char> = s.chars().collect();
    let started = Instant::now();
    let index = build_index(&chars);
    report(opt, "fm", &chars, started);

    if json {
        let rep = FmReport {
            meta: IndexMeta {
                source,
                build_args: std::env::args().collect::<Vec<_>>().join(" "),
                build_timestamp: chrono::Utc::now().to_rfc3339(),
            },
            index: &index,
        };
        println!("{}", serde_json::to_string_pretty(&rep)?);
        return Ok(());
    }

    println!("C:");
    for e in index.c_table() {
        println!("  {}\t{}", e.symbol, e.count);
    }
    println!("Occ:");
    for g in index.occ_table() {
        let entries: Vec<String> = g
            .entries
            .iter()
            .map(|e| format!("({},{},{})", e.pos, e.rank, e.symbol))
            .collect();
        println!("  {}\t{}", g.symbol, entries.join(" "));
    }
    Ok(())
}

fn run_extract(input: &Input, opt: RunOpt) -> Result<()> {
    let (_, s) = read_input(input)?;
    text::ensure_no_sentinel(&s, opt.sentinel)?;
    let chars: Vec<char> = s.chars().collect();
    let started = Instant::now();
    let index = build_index(&chars);
    let recovered = index.extract();
    report(opt, "extract", &chars, started);
    let line: String = recovered
        .iter()
        .map(|sym| match sym {
            Symbol::Sentinel => opt.sentinel,
            Symbol::Value(ch) => *ch,
        })
        .collect();
    println!("{}", line);
    Ok(())
}

fn run_matrix(input: &Input, opt: RunOpt) -> Result<()> {
    let (_, s) = read_input(input)?;
    print!("{}", matrix::format_matrix(&s, opt.sentinel));
    Ok(())
}
