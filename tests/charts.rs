use bar_graph::{
    AnsiCode, Chart, ChartKind, Config, ConfigError, GraphError, Table,
    core::config::ConfigBuilder,
};

fn chart(table: Table, b: ConfigBuilder) -> Result<Chart, GraphError> {
    Chart::new(table, b.build()?)
}

fn draw(table: Table, b: ConfigBuilder) -> String {
    chart(table, b).unwrap().render_to_string().unwrap()
}

fn ex1() -> Table {
    Table::new(
        vec!["2007", "2008", "2009", "2010", "2011", "2012", "2014"],
        vec![
            vec![183.32],
            vec![231.23],
            vec![16.43],
            vec![50.21],
            vec![508.97],
            vec![212.05],
            vec![1.0],
        ],
    )
    .unwrap()
}

#[test]
fn first_cell_normalizes_against_the_maximum() {
    let c = Chart::new(ex1(), Config::default()).unwrap();
    let first = c.normalized()[0][0];
    assert!((first - 18.0089).abs() < 1e-3, "{first}");
    assert_eq!(c.kind().name(), "bar");
}

#[test]
fn bar_rows() {
    let out = draw(ex1(), Config::builder());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], format!("2007: {} 183.32", "▇".repeat(18)));
    assert_eq!(lines[4], format!("2011: {} 508.97", "▇".repeat(50)));
    // below one tick but not the minimum of a positive table
    assert_eq!(lines[6], "2014: ▏ 1.00 ");
}

#[test]
fn small_bar_chart_exact() {
    let t = Table::new(vec!["a", "bb"], vec![vec![2.0], vec![4.0]]).unwrap();
    let out = draw(t, Config::builder().width(4).title("Two"));
    assert_eq!(out, "# Two\n\na : ▇▇ 2.00 \nbb: ▇▇▇▇ 4.00 \n");
}

#[test]
fn negative_minimum_draws_nothing() {
    let t = Table::new(vec!["a", "b"], vec![vec![-5.0], vec![5.0]]).unwrap();
    let out = draw(t, Config::builder().width(10));
    assert_eq!(out, format!("a:  -5.00\nb: {} 5.00 \n", "▇".repeat(10)));
}

#[test]
fn values_first_layout() {
    let t = Table::new(vec!["a", "b"], vec![vec![0.0], vec![4.0]]).unwrap();
    let out = draw(t, Config::builder().width(4).label_before(true));
    assert_eq!(out, "a 0.00   ▏\nb 4.00   ▇▇▇▇\n");
}

#[test]
fn different_scale_normalizes_each_category() {
    let t = Table::new(vec!["a", "b"], vec![vec![1.0, 10.0], vec![2.0, 20.0]]).unwrap();
    let out = draw(t, Config::builder().width(2).different_scale(true));
    assert_eq!(
        out,
        "a: ▇ 1.00 \n   ▇ 10.00\nb: ▇▇ 2.00 \n   ▇▇ 20.00\n"
    );
}

#[test]
fn space_between_separates_rows() {
    let t = Table::new(vec!["a", "b"], vec![vec![1.0], vec![2.0]]).unwrap();
    let out = draw(t, Config::builder().width(2).space_between(true).no_values(true));
    assert_eq!(out, "a: ▇\n\nb: ▇▇\n");
}

#[test]
fn stacked_uses_default_palette_and_sums() {
    let t = Table::new(vec!["a", "b"], vec![vec![1.0, 2.0], vec![3.0, 1.0]])
        .unwrap()
        .with_categories(vec!["Boys", "Girls"])
        .unwrap();
    let out = draw(t, Config::builder().width(8).stacked(true));
    let red = "\x1b[91m";
    let blue = "\x1b[94m";
    let reset = "\x1b[0m";
    let expected = format!(
        "{red}▇ Boys  {reset}{blue}▇ Girls  {reset}\n\n\n\
         a: {red}▇▇{reset}{blue}▇▇▇▇▇{reset} 3.00 \n\
         b: {red}▇▇▇▇▇▇▇▇{reset}{blue}▇▇{reset} 4.00 \n"
    );
    assert_eq!(out, expected);
}

#[test]
fn vertical_columns_with_legends() {
    let t = Table::new(vec!["a", "b", "c"], vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
    let out = draw(t, Config::builder().width(3).vertical(true));
    assert_eq!(
        out,
        "    ▇\n  ▇ ▇\n▇ ▇ ▇\n---Values---\n1 2 3\n. . .\n0 0 0\n---Labels---\na b c\n\n"
    );
}

#[test]
fn vertical_draws_are_repeatable() {
    let t = Table::new(vec!["a", "b"], vec![vec![1.0], vec![2.0]]).unwrap();
    let c = chart(t, Config::builder().width(2).vertical(true)).unwrap();
    assert_eq!(c.render_to_string().unwrap(), c.render_to_string().unwrap());
}

#[test]
fn histogram_buckets() {
    let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0, 5.0, 5.0, 5.0, 5.0, 5.0];
    let labels: Vec<String> = (0..data.len()).map(|i| i.to_string()).collect();
    let rows = data.iter().map(|&v| vec![v]).collect();
    let t = Table::new(labels, rows).unwrap();

    let c = chart(t, Config::builder().width(9).histogram(true).bins(4)).unwrap();
    let ChartKind::Histogram(h) = c.kind() else {
        panic!("expected a histogram, got {}", c.kind().name());
    };
    let total: usize = h.buckets().iter().map(|b| b.count).sum();
    assert_eq!(total, data.len());

    assert_eq!(
        c.render_to_string().unwrap(),
        "1.0 – 2.0: ▇ 1.00 \n\
         2.0 – 3.0: ▇▇ 2.00 \n\
         3.0 – 4.0: ▇▇▇ 3.00 \n\
         4.0 – 5.0: ▇▇▇▇▇▇▇▇▇ 9.00 \n"
    );
}

#[test]
fn histogram_accepts_one_colour() {
    let t = Table::new(vec!["a", "b"], vec![vec![1.0, 7.0], vec![2.0, 8.0]]).unwrap();
    let c = chart(
        t,
        Config::builder()
            .histogram(true)
            .colors(vec![AnsiCode::green()]),
    );
    assert!(c.is_ok());
}

#[test]
fn custom_tick_replaces_glyphs() {
    let t = Table::new(vec!["a", "b"], vec![vec![0.5], vec![2.0]]).unwrap();
    let out = draw(t, Config::builder().width(2).custom_tick("#").no_values(true));
    assert_eq!(out, "a: \nb: ##\n");
}

#[test]
fn vertical_rejects_several_categories() {
    let t = Table::new(vec!["a"], vec![vec![1.0, 2.0]]).unwrap();
    let err = chart(t, Config::builder().vertical(true)).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Config(ConfigError::VerticalMultiSeries)
    ));
}

#[test]
fn vertical_histogram_is_rejected() {
    let t = Table::new(vec!["a"], vec![vec![1.0]]).unwrap();
    let err = chart(t, Config::builder().vertical(true).histogram(true)).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Config(ConfigError::VerticalHistogram)
    ));
}

#[test]
fn colour_count_must_match_categories() {
    let t = Table::new(vec!["a"], vec![vec![1.0, 2.0]]).unwrap();
    let err = chart(t, Config::builder().colors(vec![AnsiCode::red()])).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Config(ConfigError::ColorCount {
            colors: 1,
            categories: 2
        })
    ));
}

#[test]
fn stacked_total_is_never_abbreviated() {
    let t = Table::new(vec!["a", "b"], vec![vec![12_000.0, 345.0], vec![1.0, 2.0]]).unwrap();
    let out = draw(t, Config::builder().width(4).stacked(true));
    let (red, blue, reset) = ("\x1b[91m", "\x1b[94m", "\x1b[0m");
    assert_eq!(
        out,
        format!(
            "a: {red}▇▇▇▇{reset}{blue}▏{reset} 12345.00\n\
             b: {red}▏{reset}{blue}▏{reset} 3.00 \n"
        )
    );
}

#[test]
fn stacked_ignores_label_before() {
    let t = Table::new(vec!["a", "b"], vec![vec![1.0, 2.0], vec![3.0, 1.0]]).unwrap();
    let out = draw(
        t,
        Config::builder()
            .width(8)
            .stacked(true)
            .label_before(true)
            .colors(vec![AnsiCode::red(), AnsiCode::blue()]),
    );
    let (red, blue, reset) = ("\x1b[91m", "\x1b[94m", "\x1b[0m");
    assert_eq!(
        out,
        format!(
            "a: {red}▇▇{reset}{blue}▇▇▇▇▇{reset} 3.00 \n\
             b: {red}▇▇▇▇▇▇▇▇{reset}{blue}▇▇{reset} 4.00 \n"
        )
    );
}

#[test]
fn histogram_counts_are_never_abbreviated() {
    let mut rows = vec![vec![1.0]; 1500];
    rows.push(vec![9.0]);
    let labels: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
    let t = Table::new(labels, rows).unwrap();

    let out = draw(t, Config::builder().width(4).histogram(true).bins(2));
    assert_eq!(out, "1.0 – 5.0: ▇▇▇▇ 1500.00\n5.0 – 9.0: ▏ 1.00 \n");
}

#[test]
fn histogram_keeps_its_layout_with_label_before() {
    let t = Table::new(vec!["a", "b"], vec![vec![1.0], vec![3.0]]).unwrap();
    let out = draw(
        t,
        Config::builder().width(1).histogram(true).bins(2).label_before(true),
    );
    assert_eq!(out, "1.0 – 2.0: ▇ 1.00 \n2.0 – 3.0: ▇ 1.00 \n");
}

#[test]
fn unbuilt_config_is_still_checked() {
    let t = || Table::new(vec!["a"], vec![vec![1.0]]).unwrap();

    let no_bins = Config {
        histogram: true,
        bins: 0,
        ..Config::default()
    };
    assert!(matches!(
        Chart::new(t(), no_bins).unwrap_err(),
        GraphError::Config(ConfigError::ZeroBins)
    ));

    let no_width = Config {
        width: 0,
        ..Config::default()
    };
    assert!(matches!(
        Chart::new(t(), no_width).unwrap_err(),
        GraphError::Config(ConfigError::ZeroWidth)
    ));
}
