mod request;
mod response;

pub use request::{ChatRequest, PointsQuery};
pub use response::{ChatResponse, HealthResponse, ServiceDescriptor};
