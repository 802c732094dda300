pub mod pricing;

pub use pricing::PricingTable;
