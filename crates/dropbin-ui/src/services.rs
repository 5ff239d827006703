//! Browser-facing service clients.

pub(crate) mod api;
