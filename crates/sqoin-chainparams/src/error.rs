use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ChainErrUnknownNetwork,
    ChainErrNonceExhausted,
    ChainErrBadHex,
    ChainErrBadCheckpoints,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ChainErrUnknownNetwork => "CHAIN_ERR_UNKNOWN_NETWORK",
            ErrorCode::ChainErrNonceExhausted => "CHAIN_ERR_NONCE_EXHAUSTED",
            ErrorCode::ChainErrBadHex => "CHAIN_ERR_BAD_HEX",
            ErrorCode::ChainErrBadCheckpoints => "CHAIN_ERR_BAD_CHECKPOINTS",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainError {
    pub code: ErrorCode,
    pub msg: &'static str,
}

impl ChainError {
    pub fn new(code: ErrorCode, msg: &'static str) -> Self {
        Self { code, msg }
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for ChainError {}
