#[derive(Debug, thiserror::Error)]
pub enum PalError {
    #[error("Error parsing palette: {source}")]
    NomError {
        #[source]
        source: nom::Err<nom::error::Error<Vec<u8>>>,
    },
    #[error("Error opening palette: {source}")]
    IOError {
        #[source]
        source: std::io::Error,
    },
    #[error("Palette file must be 768 bytes. Have ({have})")]
    FileSize { have: usize },
}
