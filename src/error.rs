use vexchange_sdk::SdkError;

// The Serialize and Deserialize traits are derived so Errors can be stored in
// signals and persisted alongside the state that produced them.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("Wallet is not connected!")]
    WalletDisconnected,

    #[error("No spender address to approve!")]
    MissingSpender,

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("SDK error: {0}")]
    Sdk(SdkError),

    #[error("Connex error: {0}")]
    Connex(String),
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

impl From<SdkError> for Error {
    fn from(error: SdkError) -> Self {
        Error::Sdk(error)
    }
}

impl From<alloy_sol_types::Error> for Error {
    fn from(error: alloy_sol_types::Error) -> Self {
        Error::Abi(error.to_string())
    }
}

impl From<alloy_primitives::hex::FromHexError> for Error {
    fn from(error: alloy_primitives::hex::FromHexError) -> Self {
        Error::Abi(error.to_string())
    }
}

impl From<connex::Error> for Error {
    fn from(error: connex::Error) -> Self {
        Error::Connex(error.to_string())
    }
}
