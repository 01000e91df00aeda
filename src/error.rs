use std::path::PathBuf;

use crate::cx::Cx;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("can't divide by {0}")]
    DivisionByZero(Cx),
    #[error("error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error serializing values: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("error parsing {}: {source}", path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
