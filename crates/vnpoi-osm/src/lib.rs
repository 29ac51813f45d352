pub mod client;
pub mod error;
mod nominatim;
mod overpass;
pub mod pacer;

pub use client::OsmClient;
pub use error::OsmError;
pub use overpass::MAX_RESULTS;
pub use pacer::Pacer;
