#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Failed to write benchmark output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}
