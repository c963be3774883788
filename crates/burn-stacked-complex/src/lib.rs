#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Burn Stacked Complex
//!
//! Complex tensors built on top of real valued Burn tensors.
//!
//! A complex tensor of logical shape `[n, m]` is stored as a single real tensor of shape
//! `[2n, m]`: rows `0..n` hold the real part and rows `n..2n` hold the imaginary part.
//! Every operation splits the backing tensor, computes the new parts with regular tensor
//! operations, and concatenates them back, so gradients keep flowing through autodiff.
//!
//! ```rust,ignore
//! let c = ComplexTensor::<B>::from_data([[1.0, 1.0], [2.0, 2.0]], &device)?;
//! let c = c.mul(4.0)?;
//! let c = c.clone().mm(c.t())?;
//! println!("{c}");
//! ```

mod ad;
mod check;
mod config;
mod error;
mod operand;
mod ops;
mod tensor;

pub use config::*;
pub use error::ComplexError;
pub use operand::Operand;
pub use tensor::{ComplexTensor, Origin};

pub use num_complex::{Complex32, Complex64};

/// Backend for test cases
#[cfg(test)]
pub type TestBackend = burn::backend::NdArray<f32>;

/// Backend for autodiff test cases
#[cfg(test)]
pub type TestAutodiffBackend = burn::backend::Autodiff<TestBackend>;
