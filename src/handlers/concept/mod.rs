pub mod collection;
pub mod record;
pub mod status;
pub mod utils;

// Re-export handler functions for use in routing
pub use collection::list as concepts_list;
pub use collection::create as concepts_create;

pub use record::get as concept_get;
pub use record::preferred_term_put as concept_preferred_term_put;
pub use record::terms_put as concept_terms_put;
pub use record::term_delete as concept_term_delete;

pub use status::put as status_put;
