pub mod chart;
mod text;
