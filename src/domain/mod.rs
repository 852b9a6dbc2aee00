// Domain layer: invocation-scoped values. No I/O.

pub mod model;
