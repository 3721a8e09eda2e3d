// Domain layer: the checker entities and their ports. No I/O here beyond the
// MessageSink seam.

pub mod ports;
