/// Errors raised by complex tensor construction and arithmetic.
///
/// Every error is returned synchronously by the call that triggered it, nothing is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplexError {
    /// The shape can't describe a stacked complex tensor.
    #[error("Invalid shape {shape:?} for a complex tensor\nCaused by:\n  {reason}")]
    InvalidShape {
        /// The offending shape.
        shape: Vec<usize>,
        /// Why the shape was rejected.
        reason: String,
    },

    /// The operand kind or shape isn't supported by the operation.
    #[error("Unsupported operand for `{op}`\nCaused by:\n  {reason}")]
    UnsupportedOperand {
        /// The operation name.
        op: &'static str,
        /// Why the operand was rejected.
        reason: String,
    },

    /// The operation isn't allowed on this tensor.
    #[error("Unsupported operation `{op}`\nCaused by:\n  {reason}")]
    UnsupportedOperation {
        /// The operation name.
        op: &'static str,
        /// Why the operation was rejected.
        reason: String,
    },
}

impl ComplexError {
    pub(crate) fn invalid_shape(shape: &[usize], reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_operand(op: &'static str, reason: impl Into<String>) -> Self {
        Self::UnsupportedOperand {
            op,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_operation(op: &'static str, reason: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            op,
            reason: reason.into(),
        }
    }
}
