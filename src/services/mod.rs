pub mod advisor;
pub mod providers;

pub use advisor::AdvisorService;
