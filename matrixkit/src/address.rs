/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{fmt, str::FromStr};

use crate::{
    error::{MatrixError, MatrixResult, Shape},
    views::check_window,
};

/// A whole row or a whole column of a matrix, by 1-based index.
///
/// Addresses parse from the compact forms `R<n>` and `C<n>`:
///
/// ```
/// use matrixkit::Address;
///
/// assert_eq!("R3".parse::<Address>().unwrap(), Address::row(3));
/// assert_eq!(Address::column(12).to_string(), "C12");
/// assert!("X3".parse::<Address>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Row(usize),
    Column(usize),
}

impl Address {
    pub const fn row(n: usize) -> Self {
        Self::Row(n)
    }

    pub const fn column(n: usize) -> Self {
        Self::Column(n)
    }

    /// Return the inclusive window `(r1, c1, r2, c2)` the address covers in a matrix of
    /// the given shape, or an out-of-range error if the index falls outside.
    pub fn bounds(self, shape: Shape) -> MatrixResult<(usize, usize, usize, usize)> {
        let bounds = match self {
            Self::Row(n) => (n, 1, n, shape.ncols),
            Self::Column(n) => (1, n, shape.nrows, n),
        };
        let (r1, c1, r2, c2) = bounds;
        check_window(shape, r1, c1, r2, c2)?;
        Ok(bounds)
    }
}

impl FromStr for Address {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MatrixError::AddressMalformed(s.to_owned());

        let mut chars = s.chars();
        let kind = chars.next().ok_or_else(malformed)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let n: usize = digits.parse().map_err(|_| malformed())?;

        match kind {
            'R' => Ok(Self::Row(n)),
            'C' => Ok(Self::Column(n)),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(n) => write!(f, "R{n}"),
            Self::Column(n) => write!(f, "C{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    use super::*;
    use crate::{testing::random_matrix, Cells, CellsMut, Matrix, MatrixErrorKind};

    #[rstest]
    #[case("R1", Address::Row(1))]
    #[case("R42", Address::Row(42))]
    #[case("C3", Address::Column(3))]
    #[case("C007", Address::Column(7))]
    #[case("R0", Address::Row(0))]
    fn parse_ok(#[case] s: &str, #[case] expected: Address) {
        assert_eq!(s.parse::<Address>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("R")]
    #[case("X3")]
    #[case("r3")]
    #[case("R-1")]
    #[case("R+1")]
    #[case("C 2")]
    #[case("C2x")]
    #[case("3")]
    #[case("R99999999999999999999999999")]
    fn parse_malformed(#[case] s: &str) {
        let err = s.parse::<Address>().unwrap_err();
        assert_eq!(err.kind(), MatrixErrorKind::AddressMalformed);
        assert_eq!(err, MatrixError::AddressMalformed(s.to_owned()));
    }

    #[test]
    fn display_round_trips() {
        for address in [Address::row(3), Address::column(1)] {
            assert_eq!(address.to_string().parse::<Address>().unwrap(), address);
        }
    }

    #[test]
    fn bounds() {
        let shape = Shape::new(3, 4);
        assert_eq!(Address::row(2).bounds(shape).unwrap(), (2, 1, 2, 4));
        assert_eq!(Address::column(4).bounds(shape).unwrap(), (1, 4, 3, 4));

        for address in [Address::row(0), Address::row(4), Address::column(5)] {
            let err = address.bounds(shape).unwrap_err();
            assert_eq!(err.kind(), MatrixErrorKind::OutOfRange);
        }
    }

    #[test]
    fn resolve_out_of_range() {
        let m = Matrix::zeros(2, 2);
        let err = m.address("R3").unwrap_err();
        assert_eq!(err.kind(), MatrixErrorKind::OutOfRange);
        let err = m.address("Q1").unwrap_err();
        assert_eq!(err.kind(), MatrixErrorKind::AddressMalformed);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(4, 3)]
    #[case(2, 6)]
    fn row_address_matches_matrix(#[case] nrows: usize, #[case] ncols: usize) {
        let mut rng = StdRng::seed_from_u64(0xadd0);
        let m = random_matrix(&mut rng, nrows, ncols);
        for n in 1..=nrows {
            let row = m.address(&format!("R{n}")).unwrap();
            assert_eq!(row.width(), m.width());
            assert_eq!(row.height(), 1);
            for j in 1..=ncols {
                assert_eq!(row[(1, j)], m[(n, j)]);
            }
        }
        for n in 1..=ncols {
            let col = m.select(Address::column(n)).unwrap();
            assert_eq!(col.width(), 1);
            assert_eq!(col.height(), m.height());
            for i in 1..=nrows {
                assert_eq!(col[(i, 1)], m[(i, n)]);
            }
        }
    }

    // Writing a row through the addressor changes only that row.
    #[test]
    fn write_row_through_address() {
        let mut m = Matrix::zeros(3, 3);
        m.address_mut("R2")
            .unwrap()
            .assign(&Matrix::row_vector(vec![1.0, 2.0, 3.0]))
            .unwrap();
        assert_eq!(m.row(1), &[0.0, 0.0, 0.0]);
        assert_eq!(m.row(2), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(3), &[0.0, 0.0, 0.0]);

        m.address_mut("C3").unwrap().fill(9.0);
        assert_eq!(m.row(1), &[0.0, 0.0, 9.0]);
        assert_eq!(m.row(2), &[1.0, 2.0, 9.0]);
        assert_eq!(m.row(3), &[0.0, 0.0, 9.0]);
    }
}
