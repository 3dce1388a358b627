//! Application services — the use-case layer called by driving adapters.

pub mod light_service;
pub mod schedule_service;

pub use light_service::LightService;
pub use schedule_service::ScheduleService;
