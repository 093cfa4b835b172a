pub mod fetch_flows;
pub mod golden_vectors;
pub mod instruction_flows;
