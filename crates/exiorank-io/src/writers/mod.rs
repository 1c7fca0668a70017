pub mod svg;
pub mod table;

pub use svg::write_svg_chart;
pub use table::write_csv_table;
