use thiserror::Error;

use vnpoi_osm::OsmError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Provider(#[from] OsmError),

    #[error("location data was lost; please search again")]
    SessionLost,

    #[error("resolved location has invalid coordinates")]
    InvalidLocation,
}
