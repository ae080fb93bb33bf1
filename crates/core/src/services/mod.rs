pub mod detector_service;
pub mod merge_service;
pub mod price_service;
pub mod summary_service;
