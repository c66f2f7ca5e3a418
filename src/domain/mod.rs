// Domain layer: the greeter and the people it greets. No I/O here.

pub mod model;
