use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unresolved model '{0}'")]
    UnresolvedModel(String),
    #[error("unknown action '{action}' for '{resource}'")]
    UnknownAction { resource: String, action: String },
    #[error("action '{action}' is disabled for '{resource}'")]
    ActionDisabled { resource: String, action: String },
    #[error("pk_list must not be empty")]
    EmptyKeyList,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Rejections raised while configuring the admin subsystem. All are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("admin app is already initialized")]
    AlreadyInitialized,
    #[error("admin app is not initialized")]
    NotInitialized,
    #[error("duplicate model schema '{0}'")]
    DuplicateModel(String),
    #[error("menu entry #{0} has an empty name")]
    EmptyMenuName(usize),
    #[error("menu '{0}' has an empty url")]
    EmptyUrl(String),
    #[error("duplicate menu url '{0}'")]
    DuplicateMenuUrl(String),
    #[error("user model '{0}' is not a registered resource")]
    UnknownUserModel(String),
    #[error("admin secret must not be empty")]
    EmptyAdminSecret,
    #[error("menu '{menu}' refers to unknown field '{field}'")]
    UnknownField { menu: String, field: String },
    #[error("menu '{menu}' declares unsupported bulk action '{action}'")]
    UnsupportedBulkAction { menu: String, action: String },
}
