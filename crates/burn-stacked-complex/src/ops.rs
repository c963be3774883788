use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use num_complex::Complex64;

use crate::check;
use crate::error::ComplexError;
use crate::operand::Operand;
use crate::tensor::ComplexTensor;

type Part<B> = Tensor<B, 2>;

/// Expands `(a + bi)(c + di) = (ac - bd) + (ad + bc)i` with the given product.
fn product<B, F>(
    real: Part<B>,
    imag: Part<B>,
    other_real: Part<B>,
    other_imag: Part<B>,
    f: F,
) -> (Part<B>, Part<B>)
where
    B: Backend,
    F: Fn(Part<B>, Part<B>) -> Part<B>,
{
    let ac = f(real.clone(), other_real.clone());
    let bd = f(imag.clone(), other_imag.clone());
    let ad = f(real, other_imag);
    let bc = f(imag, other_real);

    (ac - bd, ad + bc)
}

impl<B: Backend> ComplexTensor<B> {
    /// Applies an additive operation part by part.
    ///
    /// Operands without an imaginary part leave the imaginary part untouched.
    fn additive<T, S>(
        self,
        op: &'static str,
        other: Operand<B>,
        tensor_op: T,
        scalar_op: S,
    ) -> Result<Self, ComplexError>
    where
        T: Fn(Part<B>, Part<B>) -> Part<B>,
        S: Fn(Part<B>, f64) -> Part<B>,
    {
        log::trace!("Complex `{op}` with a {}", other.kind());
        let dims = self.logical_dims();
        let (real, imag) = self.into_parts();

        let (real, imag) = match other {
            Operand::Real(other) => {
                check::broadcast_into(op, dims, other.dims())?;
                (tensor_op(real, other), imag)
            }
            Operand::Complex(other) => {
                check::broadcast_into(op, dims, other.logical_dims())?;
                let (other_real, other_imag) = other.into_parts();
                (tensor_op(real, other_real), tensor_op(imag, other_imag))
            }
            Operand::Scalar(value) => (scalar_op(real, value), imag),
            Operand::ComplexScalar(value) => {
                (scalar_op(real, value.re), scalar_op(imag, value.im))
            }
        };

        Ok(Self::stack(real, imag))
    }

    /// Adds a real or complex operand.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperand`] when the operand can't be broadcast into this tensor.
    pub fn add<O: Into<Operand<B>>>(self, other: O) -> Result<Self, ComplexError> {
        self.additive(
            "add",
            other.into(),
            |lhs, rhs| lhs + rhs,
            |lhs, rhs| lhs.add_scalar(rhs),
        )
    }

    /// Subtracts a real or complex operand.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperand`] when the operand can't be broadcast into this tensor.
    pub fn sub<O: Into<Operand<B>>>(self, other: O) -> Result<Self, ComplexError> {
        self.additive(
            "sub",
            other.into(),
            |lhs, rhs| lhs - rhs,
            |lhs, rhs| lhs.sub_scalar(rhs),
        )
    }

    /// Element wise complex multiplication.
    ///
    /// Real operands scale both parts, complex operands use the complex product.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperand`] when the operand can't be broadcast into this tensor.
    pub fn mul<O: Into<Operand<B>>>(self, other: O) -> Result<Self, ComplexError> {
        let other = other.into();
        log::trace!("Complex `mul` with a {}", other.kind());
        let dims = self.logical_dims();

        match other {
            Operand::Real(other) => {
                check::broadcast_into("mul", dims, other.dims())?;
                let (real, imag) = self.into_parts();
                Ok(Self::stack(real * other.clone(), imag * other))
            }
            Operand::Complex(other) => {
                check::broadcast_into("mul", dims, other.logical_dims())?;
                let (real, imag) = self.into_parts();
                let (other_real, other_imag) = other.into_parts();
                let (real, imag) =
                    product(real, imag, other_real, other_imag, |lhs, rhs| lhs * rhs);
                Ok(Self::stack(real, imag))
            }
            Operand::Scalar(value) => Ok(self.mul_scalar(value)),
            Operand::ComplexScalar(value) => Ok(self.mul_complex_scalar(value)),
        }
    }

    /// Complex matrix multiplication.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperand`] when the operand is a scalar or the inner
    /// dimensions don't match.
    pub fn mm<O: Into<Operand<B>>>(self, other: O) -> Result<Self, ComplexError> {
        let other = other.into();
        log::trace!("Complex `mm` with a {}", other.kind());
        let dims = self.logical_dims();

        match other {
            Operand::Real(other) => {
                check::matmul(dims, other.dims())?;
                let (real, imag) = self.into_parts();
                Ok(Self::stack(real.matmul(other.clone()), imag.matmul(other)))
            }
            Operand::Complex(other) => {
                check::matmul(dims, other.logical_dims())?;
                let (real, imag) = self.into_parts();
                let (other_real, other_imag) = other.into_parts();
                let (real, imag) =
                    product(real, imag, other_real, other_imag, |lhs, rhs| lhs.matmul(rhs));
                Ok(Self::stack(real, imag))
            }
            other @ (Operand::Scalar(_) | Operand::ComplexScalar(_)) => {
                Err(ComplexError::unsupported_operand(
                    "mm",
                    format!("Matrix multiplication isn't defined for a {}.", other.kind()),
                ))
            }
        }
    }

    /// Transposes both parts, keeping the real part on top.
    pub fn t(self) -> Self {
        let (real, imag) = self.into_parts();
        Self::stack(real.transpose(), imag.transpose())
    }

    /// Element wise magnitude `sqrt(real² + imag²)`.
    ///
    /// The magnitude has no imaginary part, so the result is a real tensor of the logical shape.
    pub fn abs(self) -> Tensor<B, 2> {
        let (real, imag) = self.into_parts();
        (real.powi_scalar(2) + imag.powi_scalar(2)).sqrt()
    }

    /// Negates both parts.
    pub fn neg(self) -> Self {
        let (real, imag) = self.into_parts();
        Self::stack(real.neg(), imag.neg())
    }

    /// Complex conjugate, the imaginary part is negated.
    pub fn conj(self) -> Self {
        let (real, imag) = self.into_parts();
        Self::stack(real, imag.neg())
    }

    pub(crate) fn add_scalar(self, value: Complex64) -> Self {
        let (real, imag) = self.into_parts();
        Self::stack(real.add_scalar(value.re), imag.add_scalar(value.im))
    }

    pub(crate) fn sub_scalar(self, value: Complex64) -> Self {
        let (real, imag) = self.into_parts();
        Self::stack(real.sub_scalar(value.re), imag.sub_scalar(value.im))
    }

    pub(crate) fn mul_scalar(self, value: f64) -> Self {
        let (real, imag) = self.into_parts();
        Self::stack(real.mul_scalar(value), imag.mul_scalar(value))
    }

    pub(crate) fn mul_complex_scalar(self, value: Complex64) -> Self {
        let (real, imag) = self.into_parts();
        let (re, im) = (value.re, value.im);
        let ac = real.clone().mul_scalar(re);
        let bd = imag.clone().mul_scalar(im);
        let ad = real.mul_scalar(im);
        let bc = imag.mul_scalar(re);

        Self::stack(ac - bd, ad + bc)
    }
}

impl<B: Backend> core::ops::Add<f64> for ComplexTensor<B> {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self.add_scalar(Complex64::new(rhs, 0.0))
    }
}

impl<B: Backend> core::ops::Add<Complex64> for ComplexTensor<B> {
    type Output = Self;

    fn add(self, rhs: Complex64) -> Self {
        self.add_scalar(rhs)
    }
}

impl<B: Backend> core::ops::Sub<f64> for ComplexTensor<B> {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self.sub_scalar(Complex64::new(rhs, 0.0))
    }
}

impl<B: Backend> core::ops::Sub<Complex64> for ComplexTensor<B> {
    type Output = Self;

    fn sub(self, rhs: Complex64) -> Self {
        self.sub_scalar(rhs)
    }
}

impl<B: Backend> core::ops::Mul<f64> for ComplexTensor<B> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.mul_scalar(rhs)
    }
}

impl<B: Backend> core::ops::Mul<Complex64> for ComplexTensor<B> {
    type Output = Self;

    fn mul(self, rhs: Complex64) -> Self {
        self.mul_complex_scalar(rhs)
    }
}

impl<B: Backend> core::ops::Neg for ComplexTensor<B> {
    type Output = Self;

    fn neg(self) -> Self {
        ComplexTensor::neg(self)
    }
}
