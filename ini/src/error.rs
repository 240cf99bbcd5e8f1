#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("Error opening config: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
