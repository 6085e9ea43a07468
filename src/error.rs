use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConvertError {
    #[error("input position is the zero vector; longitude and latitude are undefined")]
    ZeroVector,
}
