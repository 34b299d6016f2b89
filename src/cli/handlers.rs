use std::{io, time::Instant};

use log::LevelFilter;

use crate::{
    core::{
        bounds::{fit_width, terminal_columns},
        color::{AnsiCode, colorize},
        config::Config,
        data::read_rows_from_path,
        error::GraphError,
    },
    render::Chart,
};

use super::parse::PlotArgs;

/// `warn` by default, `debug` with `--verbose`; `RUST_LOG` wins over both.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // a logger may already be installed
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

pub fn plot(a: &PlotArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let table = read_rows_from_path(&a.file, a.delim.as_deref())?.into_table()?;
    log::debug!(
        "ingest: {} µs ({} rows)\n{table}",
        t_ingest.elapsed().as_micros(),
        table.len()
    );

    let width = if a.fit {
        let fitted = fit_width(a.width, table.find_max_label_length(), terminal_columns());
        log::debug!("--fit: width {} -> {fitted}", a.width);
        fitted
    } else {
        a.width
    };

    let mut b = Config::builder()
        .title_opt(a.title.as_deref())
        .width(width)
        .format(a.format.as_str())
        .suffix(a.suffix.as_str())
        .no_labels(a.no_labels)
        .no_values(a.no_values)
        .space_between(a.space_between)
        .vertical(a.vertical)
        .stacked(a.stacked)
        .histogram(a.histogram)
        .bins(a.bins)
        .different_scale(a.different_scale)
        .label_before(a.label_before)
        .percentage(a.percentage)
        .no_readable(a.no_readable);
    if let Some(t) = &a.custom_tick {
        b = b.custom_tick(t.as_str());
    }
    if !a.color.is_empty() {
        let colors = a
            .color
            .iter()
            .map(|c| AnsiCode::from_name(c))
            .collect::<Result<Vec<_>, _>>()?;
        b = b.colors(colors);
    }
    let cfg = b.build()?;

    let t_render = Instant::now();
    let chart = Chart::new(table, cfg)?;
    let mut out = io::stdout().lock();
    match chart.draw(&mut out) {
        Err(e) if e.is_broken_pipe() => {
            log::debug!("stdout closed early");
            Ok(())
        }
        other => {
            log::debug!("render: {} µs", t_render.elapsed().as_micros());
            other
        }
    }
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    println!("{}", colorize(&AnsiCode::red(), "red"));
    println!("{}", colorize(&AnsiCode::blue(), "blue"));
    println!("{}", colorize(&AnsiCode::green(), "green"));
    println!("{}", colorize(&AnsiCode::magenta(), "magenta"));
    println!("{}", colorize(&AnsiCode::yellow(), "yellow"));
    println!("{}", colorize(&AnsiCode::black(), "black"));
    println!("{}", colorize(&AnsiCode::cyan(), "cyan"));
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "bar-graph";
    println!(
        "
Example invocations
-------------------
• Basic bars       : {bin} plot data/ex1.dat
• From stdin       : cat data/ex1.dat | {bin} plot
• Titled + colored : {bin} plot data/ex1.dat --title \"Football players\" --color blue
• Two categories   : {bin} plot data/ex4.dat --color red blue
• Stacked          : {bin} plot data/ex4.dat --stacked
• Own scales       : {bin} plot data/ex4.dat --different-scale --color green cyan
• Vertical         : {bin} plot data/ex1.dat --vertical
• Histogram        : {bin} plot data/ex1.dat --histogram --bins 4
• Values first     : {bin} plot data/ex1.dat --label-before --custom-tick '#'
• Fit the terminal : {bin} plot data/ex1.dat --width 200 --fit
"
    );
}
