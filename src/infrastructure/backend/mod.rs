//! Backend infrastructure - simulated gateway implementation

mod in_memory;

pub use in_memory::{SimulatedBackendConfig, SimulatedItemBackend};
