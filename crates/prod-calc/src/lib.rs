//! # Production Calculation Engine
//!
//! 依原物料庫存與產品單價計算生產建議

pub mod allocator;
pub mod feasibility;
pub mod ledger;
pub mod report;
pub mod service;

// Re-export 主要類型
pub use allocator::{Allocation, GreedyAllocator};
pub use feasibility::FeasibilityCalculator;
pub use ledger::StockLedger;
pub use report::{SuggestionItem, SuggestionReport};
pub use service::ProductionCalculator;
