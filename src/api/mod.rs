pub mod router;

pub use router::triage_router;
