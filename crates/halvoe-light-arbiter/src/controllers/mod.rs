mod endpoint;

pub use endpoint::EndpointController;
