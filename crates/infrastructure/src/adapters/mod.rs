//! Adapters implementing application ports

mod backend_adapter;

pub use backend_adapter::BackendAdapter;
