// Domain layer: records, query types and ports. No HTTP or file-system code here.

pub mod model;
pub mod ports;
pub mod query;
