pub mod concept;
pub mod serve;
