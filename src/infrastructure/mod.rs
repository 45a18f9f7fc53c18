pub mod event_bus;
pub mod in_memory;
pub mod trxps_api;
