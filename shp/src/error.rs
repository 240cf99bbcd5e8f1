#[derive(Debug, thiserror::Error)]
pub enum ShpError {
    #[error("Error parsing sprite container: {source}")]
    NomError {
        #[source]
        source: nom::Err<nom::error::Error<Vec<u8>>>,
    },
    #[error("Error opening sprite container: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
    #[error("Remap table must have 256 entries. Have ({have})")]
    RemapTableLength { have: usize },
}
