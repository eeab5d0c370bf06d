pub mod axis;
pub mod chart_group;
pub mod record;
pub mod records;
