#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("duplicate job id {0} in fetched batch")]
    DuplicateJobId(u32),

    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("route {0} requires a parameter")]
    MissingRouteParam(String),

    #[error(transparent)]
    Common(#[from] jobboard_common::error::CommonError),
}
