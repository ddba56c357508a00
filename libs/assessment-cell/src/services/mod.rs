pub mod fsfi;
pub mod mental_health;
pub mod pcos;

pub use fsfi::FsfiService;
pub use mental_health::MentalHealthService;
pub use pcos::PcosService;
