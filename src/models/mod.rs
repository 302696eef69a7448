pub mod limit;
pub mod response;
pub mod stock;

pub use limit::*;
pub use response::*;
pub use stock::*;
