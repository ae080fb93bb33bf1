pub mod chart;
pub mod event;
pub mod filters;
pub mod price;
pub mod settings;
