mod fire;
mod light;

pub use fire::FireUsecases;
pub use light::LightUsecases;
