//! Error type definitions for signing operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for the public ksig API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid signature error
    InvalidSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Public key recovery failed
    RecoveryFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for ksig operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidSignature { .. } => Self::InvalidSignature {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::RecoveryFailed { .. } => Self::RecoveryFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::SerializationError { .. } => Self::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Attach a message to an existing error
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::RecoveryFailed { context, .. } => Self::RecoveryFailed { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The static context string recorded with this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::RecoveryFailed { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::SerializationError { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (kind, context) = match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                return write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                );
            }
            Self::InvalidKey { context, .. } => ("Invalid key", context),
            Self::InvalidSignature { context, .. } => ("Invalid signature", context),
            Self::RecoveryFailed { context, .. } => ("Recovery failed", context),
            Self::InvalidParameter { context, .. } => ("Invalid parameter", context),
            Self::SerializationError { context, .. } => ("Serialization error", context),
            Self::RandomGenerationError { context, .. } => ("Random generation error", context),
            Self::Other { context, .. } => ("Error", context),
        };

        #[cfg(feature = "std")]
        {
            let message = match self {
                Self::InvalidKey { message, .. }
                | Self::InvalidSignature { message, .. }
                | Self::RecoveryFailed { message, .. }
                | Self::InvalidParameter { message, .. }
                | Self::SerializationError { message, .. }
                | Self::RandomGenerationError { message, .. }
                | Self::Other { message, .. } => message.as_str(),
                Self::InvalidLength { .. } => "",
            };
            if !message.is_empty() {
                return write!(f, "{}: {}: {}", kind, context, message);
            }
        }

        write!(f, "{}: {}", kind, context)
    }
}
