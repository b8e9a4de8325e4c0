//! Service layer - orchestration over domain contracts

mod admission_service;

pub use admission_service::{AdmissionService, AdmissionServiceTrait};
