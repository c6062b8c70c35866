// Traffic profiles registered with the load test.

pub mod shopper;
pub mod stress;
