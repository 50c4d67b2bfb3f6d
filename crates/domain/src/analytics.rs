pub mod aggregate;
pub mod counter;

pub use aggregate::GroupAggregator;
pub use counter::FrequencyCounter;
