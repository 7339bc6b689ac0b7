pub mod comparison;

pub use comparison::render_comparison_chart;
