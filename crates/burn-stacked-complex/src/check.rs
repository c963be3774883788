//! Shape validation shared by the constructors and the operators.

use core::ops::Range;

use crate::error::ComplexError;

/// Validates the dimensions of a backing tensor: two dims with an even, non-zero row count.
pub(crate) fn stacked(dims: &[usize]) -> Result<(), ComplexError> {
    if dims.len() != 2 {
        return Err(ComplexError::invalid_shape(
            dims,
            format!("Expected a 2-D backing tensor, got {} dims.", dims.len()),
        ));
    }

    let rows = dims[0];
    if rows == 0 {
        return Err(ComplexError::invalid_shape(
            dims,
            "The backing tensor has no rows.",
        ));
    }
    if dims[1] == 0 {
        return Err(ComplexError::invalid_shape(
            dims,
            "The backing tensor has no columns.",
        ));
    }
    if rows % 2 != 0 {
        return Err(ComplexError::invalid_shape(
            dims,
            format!("The row count {rows} can't be split into real and imaginary halves."),
        ));
    }

    Ok(())
}

/// Doubles a logical shape into the backing shape.
///
/// A rank 1 shape `[m]` is a single logical row, stored as `[2, m]`.
pub(crate) fn doubled(dims: &[usize]) -> Result<[usize; 2], ComplexError> {
    let [rows, cols] = match *dims {
        [cols] => [1, cols],
        [rows, cols] => [rows, cols],
        _ => {
            return Err(ComplexError::invalid_shape(
                dims,
                format!("Expected 1 or 2 logical dims, got {}.", dims.len()),
            ));
        }
    };

    if rows == 0 || cols == 0 {
        return Err(ComplexError::invalid_shape(dims, "Zero sized dimension."));
    }

    let rows = rows
        .checked_mul(2)
        .ok_or_else(|| ComplexError::invalid_shape(dims, "Doubling the rows overflows."))?;

    Ok([rows, cols])
}

/// The real and imaginary parts must have identical shapes.
pub(crate) fn parts(real: [usize; 2], imag: [usize; 2]) -> Result<(), ComplexError> {
    if real != imag {
        return Err(ComplexError::invalid_shape(
            &real,
            format!("The imaginary part has shape {imag:?}, expected {real:?}."),
        ));
    }

    Ok(())
}

/// The operand must broadcast into the receiver's logical shape.
pub(crate) fn broadcast_into(
    op: &'static str,
    lhs: [usize; 2],
    rhs: [usize; 2],
) -> Result<(), ComplexError> {
    let compatible = lhs
        .iter()
        .zip(rhs.iter())
        .all(|(lhs, rhs)| lhs == rhs || *rhs == 1);

    if !compatible {
        return Err(ComplexError::unsupported_operand(
            op,
            format!("Shape {rhs:?} can't be broadcast into {lhs:?}."),
        ));
    }

    Ok(())
}

/// Inner dimensions of a matrix product must agree.
pub(crate) fn matmul(lhs: [usize; 2], rhs: [usize; 2]) -> Result<(), ComplexError> {
    if lhs[1] != rhs[0] {
        return Err(ComplexError::unsupported_operand(
            "mm",
            format!(
                "Inner dimensions don't match: [{}x{}] @ [{}x{}].",
                lhs[0], lhs[1], rhs[0], rhs[1]
            ),
        ));
    }

    Ok(())
}

/// Logical ranges must stay inside the logical shape.
pub(crate) fn ranges(
    op: &'static str,
    dims: [usize; 2],
    ranges: &[Range<usize>; 2],
) -> Result<(), ComplexError> {
    for (axis, (range, size)) in ranges.iter().zip(dims.iter()).enumerate() {
        if range.start >= range.end || range.end > *size {
            return Err(ComplexError::unsupported_operand(
                op,
                format!("Range {range:?} is invalid for axis {axis} of size {size}."),
            ));
        }
    }

    Ok(())
}
