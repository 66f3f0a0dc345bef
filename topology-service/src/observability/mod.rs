//! Observability helpers for `topology-service`.

pub mod events;
