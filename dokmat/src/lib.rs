/*!
# dokmat

dokmat is a sparse matrix library storing its non-zero values in a
dictionary of keys.

It features a single sparse matrix type, [`DokMat`], which maps
`(row, col)` coordinates to non-zero values. Only non-zero values are ever
stored: writing a zero at a coordinate removes it. The matrix supports element
access and mutation, addition, subtraction and multiplication, none of which
materialize a dense matrix.

## Examples

Matrix construction

```rust
use dokmat::DokMat;
let mut a: DokMat<i64> = DokMat::new(2, 3);
a.set(0, 1, 4).unwrap();
a.set(1, 2, -2).unwrap();
assert_eq!(a.get(0, 1), 4);
assert_eq!(a.get(0, 0), 0);
assert_eq!(a.nnz(), 2);
```

Parsing the textual description format

```rust
use dokmat::DokMatInt;
let a: DokMatInt = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)".parse().unwrap();
assert_eq!(a.shape(), (2, 2));
assert_eq!(a.get(1, 1), 2);
```

Matrix matrix multiplication, addition

```rust
use dokmat::DokMatInt;
let eye = DokMatInt::eye(2);
let a = DokMatInt::from_description("rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n(1,0,3)\n(1,1,4)").unwrap();
let b = a.checked_mul(&eye).unwrap();
assert_eq!(a, b);
let c = a.checked_add(&a).unwrap();
assert_eq!(c.get(1, 1), 8);
assert!(a.checked_sub(&a).unwrap().is_zero());
```

Arithmetic reports overflow rather than wrapping

```rust
use dokmat::{DokError, DokMatInt};
let a = DokMatInt::from_description("rows=1\ncols=1\n(0, 0, 9223372036854775807)").unwrap();
assert_eq!(a.checked_add(&a), Err(DokError::Overflow { row: 0, col: 0 }));
```
*/

pub mod checked_arith;
pub mod errors;
pub mod io;
pub mod ops;
mod sparse;

pub use crate::checked_arith::CheckedArith;
pub use crate::errors::{DokError, FormatError, FormatErrorKind, UnknownOperation};
pub use crate::ops::Operation;
pub use crate::sparse::binop::{add_mat, sub_mat};
pub use crate::sparse::prod::mul_mat;
pub use crate::sparse::to_dense::assign_to_dense;
pub use crate::sparse::visu;
pub use crate::sparse::{Coord, DokMat, DokMatInt};

/// Shape of a matrix, as `(rows, cols)`.
pub type Shape = (usize, usize);

#[cfg(test)]
mod test_data;
