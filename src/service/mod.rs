pub mod flight;
pub mod registry;

pub use flight::FlightLogService;
pub use registry::RegistryService;
