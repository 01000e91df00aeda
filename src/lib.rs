/*!
Complex numbers that do their arithmetic in polar form and compare with a
tolerance.

```
use polar_cx::Cx;

let z = Cx::new(1.0, 1.0);
assert_eq!(z * Cx::new(2.0, 3.0), Cx::new(-1.0, 5.0));
assert_eq!((2.0 / z).unwrap(), z.conjugate());
assert_eq!(z.abs(), 2f64.sqrt());
```
*/

pub mod cmp;
pub mod cx;
pub mod error;
pub mod rw;

pub use crate::cx::{Cx, Operand};
pub use crate::error::{Error, Result};
