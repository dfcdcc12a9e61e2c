//! Error types for the signature crate

use ksig_algorithms::error::Error as AlgoError;
use thiserror::Error;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Secret key bytes are not 32 bytes or not in [1, n-1]
    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(&'static str),

    /// An arithmetic operation was undefined for its input
    #[error("Invalid operand for {operation}")]
    InvalidOperand {
        /// Operation that rejected the operand
        operation: &'static str,
    },

    /// A decoded or reconstructed point does not satisfy the curve equation
    #[error("Point is not on the curve ({context})")]
    PointNotOnCurve {
        /// Where the point was decoded
        context: &'static str,
    },

    /// Wrong length, bad tag byte or out-of-range component
    #[error("Malformed {context} encoding: {details}")]
    MalformedEncoding {
        /// What was being decoded
        context: &'static str,
        /// Why it was rejected
        details: String,
    },

    /// Recovery id outside 0..=3 or no public key for this signature
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(&'static str),

    /// Signature does not verify under the given key
    #[error("Invalid signature: {0}")]
    InvalidSignature(&'static str),

    /// Signature generation failed
    #[error("{algorithm} signature generation failed: {details}")]
    SignatureGeneration {
        /// Signature scheme name
        algorithm: &'static str,
        /// Failure details
        details: &'static str,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn malformed(context: &'static str, details: impl Into<String>) -> Self {
        Error::MalformedEncoding {
            context,
            details: details.into(),
        }
    }
}

// Convert from algorithms::error::Error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::Parameter { name, reason } => {
                Error::malformed("parameter", format!("{}: {}", name, reason))
            }
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::malformed(
                context,
                format!("expected {} bytes, got {}", expected, actual),
            ),
            AlgoError::InvalidOperand { operation } => Error::InvalidOperand { operation },
            AlgoError::PointNotOnCurve { context } => Error::PointNotOnCurve { context },
            other => Error::Internal(format!("Algorithm error: {}", other)),
        }
    }
}

// Convert to api::Error
impl From<Error> for ksig_api::Error {
    fn from(err: Error) -> Self {
        #[cfg(feature = "std")]
        let message = err.to_string();
        match err {
            Error::InvalidSecretKey(_) => ksig_api::Error::InvalidKey {
                context: "secp256k1 secret key",
                #[cfg(feature = "std")]
                message,
            },
            Error::PointNotOnCurve { context } => ksig_api::Error::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidOperand { operation } => ksig_api::Error::InvalidParameter {
                context: operation,
                #[cfg(feature = "std")]
                message,
            },
            Error::MalformedEncoding { context, .. } => ksig_api::Error::SerializationError {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidRecoveryId(_) => ksig_api::Error::RecoveryFailed {
                context: "ECDSA-secp256k1 recover",
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidSignature(_) => ksig_api::Error::InvalidSignature {
                context: "ECDSA-secp256k1 verify",
                #[cfg(feature = "std")]
                message,
            },
            Error::SignatureGeneration { algorithm, .. } => ksig_api::Error::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message,
            },
            Error::Internal(_) => ksig_api::Error::Other {
                context: "internal",
                #[cfg(feature = "std")]
                message,
            },
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
