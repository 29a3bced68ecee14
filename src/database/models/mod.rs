pub mod concept;

pub use concept::ConceptRow;
