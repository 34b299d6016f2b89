//! Chart front door: validate once, pick the kind once, normalize eagerly.

use std::io::{self, Write};

use crate::{
    core::{
        color::{AnsiCode, palette},
        config::Config,
        data::Table,
        error::{ConfigError, GraphError},
    },
    render::{
        bar::BarChart, frame::write_header, histogram::HistogramChart, row::Glyphs,
        stacked::StackedChart, vertical::VerticalChart,
    },
};

/// Shared render capability of every chart kind.
pub trait Render {
    /// Write the rows of `chart` (the header is already out).
    fn render<W: Write>(&self, chart: &Chart, out: &mut W) -> io::Result<()>;

    /// Tick counts computed at construction.
    fn normalized(&self) -> &[Vec<f64>];
}

/// Orientation / aggregation strategy, chosen from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Bar(BarChart),
    Stacked(StackedChart),
    Vertical(VerticalChart),
    Histogram(HistogramChart),
}

impl ChartKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Stacked(_) => "stacked",
            Self::Vertical(_) => "vertical",
            Self::Histogram(_) => "histogram",
        }
    }
}

/// A table bound to a configuration, ready to draw.
#[derive(Debug, Clone)]
pub struct Chart {
    table: Table,
    config: Config,
    colors: Vec<Option<AnsiCode>>,
    kind: ChartKind,
}

impl Chart {
    /// Check the table against the configuration and normalize it.
    ///
    /// Every configuration error is reported here; [`Chart::draw`] can only
    /// fail on output.
    pub fn new(table: Table, config: Config) -> Result<Self, GraphError> {
        let categories = table.category_count();

        // fields are public, so a literal can skip `ConfigBuilder::build`
        if config.width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }
        if config.bins == 0 {
            return Err(ConfigError::ZeroBins.into());
        }
        if config.histogram && config.vertical {
            return Err(ConfigError::VerticalHistogram.into());
        }
        if config.vertical && categories > 1 && !config.different_scale {
            return Err(ConfigError::VerticalMultiSeries.into());
        }

        let colors: Vec<Option<AnsiCode>> = match &config.colors {
            Some(c) => {
                let fits = c.len() == categories || (config.histogram && c.len() == 1);
                if !fits {
                    return Err(ConfigError::ColorCount {
                        colors: c.len(),
                        categories,
                    }
                    .into());
                }
                c.iter().copied().map(Some).collect()
            }
            None if config.stacked && !config.histogram => {
                log::info!("no colors given, using the default palette for {categories} categories");
                palette(categories).into_iter().map(Some).collect()
            }
            None => vec![None; categories],
        };

        let kind = if config.histogram {
            ChartKind::Histogram(HistogramChart::new(&table, &config))
        } else if config.stacked {
            ChartKind::Stacked(StackedChart::new(&table, &config))
        } else if config.vertical {
            ChartKind::Vertical(VerticalChart::new(&table, &config))
        } else {
            ChartKind::Bar(BarChart::new(&table, &config))
        };
        log::debug!(
            "{} chart: {} rows x {categories} categories, width {}",
            kind.name(),
            table.len(),
            config.width
        );

        Ok(Self {
            table,
            config,
            colors,
            kind,
        })
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ChartKind {
        &self.kind
    }
    #[inline]
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Style for category `j`, if any.
    #[inline]
    #[must_use]
    pub fn color(&self, j: usize) -> Option<&AnsiCode> {
        self.colors.get(j).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn normalized(&self) -> &[Vec<f64>] {
        match &self.kind {
            ChartKind::Bar(k) => k.normalized(),
            ChartKind::Stacked(k) => k.normalized(),
            ChartKind::Vertical(k) => k.normalized(),
            ChartKind::Histogram(k) => k.normalized(),
        }
    }

    /// Header, then every row.  Can be called again; the table is not
    /// re-normalized.
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<(), GraphError> {
        write_header(
            out,
            self.config.title.as_deref(),
            &self.table,
            &self.colors,
            &Glyphs::from_config(&self.config),
        )?;
        match &self.kind {
            ChartKind::Bar(k) => k.render(self, out)?,
            ChartKind::Stacked(k) => k.render(self, out)?,
            ChartKind::Vertical(k) => k.render(self, out)?,
            ChartKind::Histogram(k) => k.render(self, out)?,
        }
        out.flush()?;
        Ok(())
    }

    /// [`Chart::draw`] into a string.
    pub fn render_to_string(&self) -> Result<String, GraphError> {
        let mut buf = Vec::new();
        self.draw(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
