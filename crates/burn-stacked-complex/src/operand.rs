use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use num_complex::{Complex32, Complex64};

use crate::tensor::ComplexTensor;

/// The right hand side of a complex tensor operation.
///
/// Real operands carry no imaginary part, it is treated as zero.
#[derive(Clone, Debug)]
pub enum Operand<B: Backend> {
    /// A real tensor of the same logical shape, or broadcastable into it.
    Real(Tensor<B, 2>),
    /// Another complex tensor.
    Complex(ComplexTensor<B>),
    /// A real scalar.
    Scalar(f64),
    /// A complex scalar.
    ComplexScalar(Complex64),
}

impl<B: Backend> Operand<B> {
    /// Name of the operand kind, used in error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Real(_) => "real tensor",
            Self::Complex(_) => "complex tensor",
            Self::Scalar(_) => "real scalar",
            Self::ComplexScalar(_) => "complex scalar",
        }
    }
}

impl<B: Backend> From<Tensor<B, 2>> for Operand<B> {
    fn from(tensor: Tensor<B, 2>) -> Self {
        Self::Real(tensor)
    }
}

impl<B: Backend> From<ComplexTensor<B>> for Operand<B> {
    fn from(tensor: ComplexTensor<B>) -> Self {
        Self::Complex(tensor)
    }
}

impl<B: Backend> From<&ComplexTensor<B>> for Operand<B> {
    fn from(tensor: &ComplexTensor<B>) -> Self {
        Self::Complex(tensor.clone())
    }
}

impl<B: Backend> From<f64> for Operand<B> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<B: Backend> From<f32> for Operand<B> {
    fn from(value: f32) -> Self {
        Self::Scalar(value as f64)
    }
}

impl<B: Backend> From<Complex64> for Operand<B> {
    fn from(value: Complex64) -> Self {
        Self::ComplexScalar(value)
    }
}

impl<B: Backend> From<Complex32> for Operand<B> {
    fn from(value: Complex32) -> Self {
        Self::ComplexScalar(Complex64::new(value.re as f64, value.im as f64))
    }
}
