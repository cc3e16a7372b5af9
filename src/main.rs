use anyhow::{bail, Context};
use clap::Parser;

use growbuf::{DynamicArray, TextBuffer, TextGrid};

mod cli;
use cli::display::{self, themed, BOLD, CYAN};
use cli::script::{self, Outcome};
use cli::{Cli, Commands};

/// Elements shown per array before the middle is elided.
const MAX_SHOWN: usize = 12;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Ops { ops } => run_ops(&ops),
        Commands::Concat { parts } => run_concat(&parts),
        Commands::Grid { lines, repeat } => run_grid(&lines, repeat),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.format_timestamp(None).init();
}

fn run_ops(raw: &[String]) -> anyhow::Result<()> {
    let ops = script::parse_script(raw)?;
    let mut array: DynamicArray<i64> = DynamicArray::new();

    display::section_top("growbuf ops");
    print_state("new", &array, None);

    for (step, op) in ops.into_iter().enumerate() {
        match op.apply(&mut array) {
            Ok(Outcome::Done) => print_state(&op.to_string(), &array, None),
            Ok(Outcome::Removed(value)) => print_state(&op.to_string(), &array, Some(value)),
            Err(err) => {
                display::row(&format!(
                    " {} {}",
                    display::pad_right(&op.to_string(), 20),
                    display::error_label(&format!("{} ({})", err, err.kind()))
                ));
                display::section_bot();
                return Err(err).with_context(|| format!("step {} `{}` failed", step + 1, op));
            }
        }
    }

    display::section_bot();
    Ok(())
}

fn print_state(label: &str, array: &DynamicArray<i64>, removed: Option<i64>) {
    let mut line = format!(
        " {} {} {}",
        display::pad_right(label, 20),
        display::pad_right(&display::fill_label(array.len(), array.capacity()), 8),
        display::elements(array.as_slice(), MAX_SHOWN)
    );
    if let Some(value) = removed {
        line.push_str(&format!("  → {}", value));
    }
    display::row(&line);
}

fn run_concat(parts: &[String]) -> anyhow::Result<()> {
    let mut joined = TextBuffer::new();
    for part in parts {
        let text = TextBuffer::try_from(part.as_str())
            .with_context(|| format!("cannot use `{}` as text", part.escape_debug()))?;
        joined
            .append(&text)
            .context("failed to grow the text buffer")?;
    }

    println!("{}", joined);
    println!(
        "{} {}  {} {}",
        themed(CYAN, &[BOLD], "length"),
        joined.length(),
        themed(CYAN, &[BOLD], "capacity"),
        joined.capacity()
    );
    Ok(())
}

fn run_grid(lines: &[String], repeat: usize) -> anyhow::Result<()> {
    if repeat == 0 {
        bail!("--repeat must be at least 1");
    }

    let strs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let grid = TextGrid::from_strs(&strs).context("lines do not form a grid")?;

    let mut shown = grid.clone();
    for _ in 1..repeat {
        shown = shown.beside(&grid)?;
    }

    println!("{}", shown);
    println!(
        "{} {}x{}",
        themed(CYAN, &[BOLD], "size"),
        shown.width(),
        shown.height()
    );
    Ok(())
}
