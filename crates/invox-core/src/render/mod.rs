//! Rendering of the invoice collection into export formats

pub mod csv;

pub use csv::render_csv;
