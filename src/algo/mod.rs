mod edd;
mod horn;

pub use edd::Edd;
pub use horn::{schedule, Horn};

/// Constructors of every available scheduler.
#[allow(unsafe_code)]
#[linkme::distributed_slice]
pub static SCHEDULERS: [fn() -> Box<dyn crate::core::Scheduler>];
