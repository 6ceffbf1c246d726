use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No room or point named \"{0}\" on this floor")]
    PlaceNotFound(String),
    #[error("\"{0}\" has no usable coordinates")]
    NoCoordinates(String),
    #[error("No usable edge to snap onto")]
    NoUsableEdge,
    #[error("No path found between the selected locations")]
    NoPathFound,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
