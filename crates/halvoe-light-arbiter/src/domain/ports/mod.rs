pub mod endpoint;
pub mod output;
pub mod usecases;

pub use endpoint::*;
pub use output::*;
pub use usecases::*;
