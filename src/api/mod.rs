//! Backend API layer.
//!
//! - [`client`]: request builders and response decoders for the three
//!   endpoints
//! - [`request`]: request descriptors and the routing context echoed back by
//!   the runtime

pub mod client;
pub mod request;

pub use client::{ApiClient, CitiesResponse, CityResponse, DEFAULT_API_URL};
pub use request::{ApiRequest, RequestContext, RequestKind};
