#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Crack(#[from] hashcrack::Error),

    #[error("failed writing results: {0}")]
    Output(#[source] std::io::Error),

    #[error("invalid progress bar template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}
