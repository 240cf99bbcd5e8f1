#[derive(Debug, thiserror::Error)]
pub enum TmpError {
    #[error("Error parsing tile container: {source}")]
    NomError {
        #[source]
        source: nom::Err<nom::error::Error<Vec<u8>>>,
    },
    #[error("Error opening tile container: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
    #[error("Remap table must have 256 entries. Have ({have})")]
    RemapTableLength { have: usize },
}
