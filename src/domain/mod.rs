pub mod context;
pub mod criteria;
pub mod events;
pub mod handler;
pub mod media;
pub mod order;
pub mod payment_method;
pub mod ports;
pub mod remote;
pub mod status;
