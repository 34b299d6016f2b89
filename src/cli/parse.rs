use clap::{Parser, Subcommand};

use crate::core::constants::{DEFAULT_BINS, DEFAULT_FORMAT, DEFAULT_WIDTH};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "bar-graph",
    version,
    about = "Bar charts, histograms and stacked columns in the terminal"
)]
pub struct Cli {
    /// Emit debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot `label,value[,value…]` data from a file or stdin
    Plot(PlotArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// `bar-graph plot …`
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct PlotArgs {
    /// Data path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Bar width in ticks
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Cap the width so every row fits the terminal
    #[arg(long)]
    pub fit: bool,

    /// Number template, e.g. `{:<5.2f}` or `{:.0f}`
    #[arg(long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Text appended after every value
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub suffix: String,

    /// Hide the label column
    #[arg(long)]
    pub no_labels: bool,

    /// Hide the values after the bars
    #[arg(long)]
    pub no_values: bool,

    /// Blank line between rows
    #[arg(long)]
    pub space_between: bool,

    /// Bar colors, one per category (name or `#RRGGBB`)
    #[arg(long, num_args = 1..)]
    pub color: Vec<String>,

    /// Vertical columns
    #[arg(long)]
    pub vertical: bool,

    /// Stack the categories of a row into one bar
    #[arg(long)]
    pub stacked: bool,

    /// Histogram of the first category
    #[arg(long)]
    pub histogram: bool,

    /// Histogram bucket count
    #[arg(long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Scale every category on its own
    #[arg(long)]
    pub different_scale: bool,

    /// Glyph used instead of the default tick
    #[arg(long)]
    pub custom_tick: Option<String>,

    /// Field separator of the input
    #[arg(long)]
    pub delim: Option<String>,

    /// Print the value before the bar
    #[arg(long)]
    pub label_before: bool,

    /// Show values as percentages
    #[arg(long)]
    pub percentage: bool,

    /// Keep raw values, no K/M/B/T units
    #[arg(long)]
    pub no_readable: bool,
}
