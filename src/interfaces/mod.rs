//! Surfaces the plugin exposes to the host's administration.

pub mod http;
