pub mod config;
pub mod margin;
pub mod oracle;
pub mod position;
pub mod series;

pub use config::*;
pub use margin::*;
pub use oracle::*;
pub use position::*;
pub use series::*;
