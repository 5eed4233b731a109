pub(crate) mod coerce;
pub(crate) mod snapshot;
