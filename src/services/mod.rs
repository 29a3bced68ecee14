pub mod concept_service;

pub use concept_service::ConceptService;
