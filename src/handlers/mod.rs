// handlers/mod.rs - HTTP handlers
//
// public:  service info and health (/ and /health)
// concept: the concept store operations (/all-concepts, /concept/*, /concepts, /update-status/*)
pub mod concept;
pub mod public;
