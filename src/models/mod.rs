pub mod chart;
pub mod stock;

pub use chart::WeeklyChart;
pub use stock::{MarketData, Stock};
