pub mod bar;
pub mod binner;
pub mod chart;
pub mod frame;
pub mod histogram;
pub mod normalize;
pub mod row;
pub mod stacked;
pub mod vertical;

pub use binner::{Bucket, bin};
pub use chart::{Chart, ChartKind, Render};
pub use normalize::{normalize, normalize_columns};
pub use row::{Glyphs, RowLayout, Run, bar_run};
