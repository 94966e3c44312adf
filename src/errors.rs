use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bearing type: {}",.0)]
    InvalidBearingType(u32),
    #[error("Unknown bearing type name: {}",.0)]
    UnknownBearingType(String),
    #[error("Serde Json (de)serialization failed!")]
    SerdeDeserialize(#[from] serde_json::Error),
}
