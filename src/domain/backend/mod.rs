//! Backend domain - authoritative item persistence contract

mod gateway;

pub use gateway::ItemGateway;

#[cfg(test)]
pub use gateway::mock;
