//! Test function implementations, one module per function

pub mod branin;
pub mod camel;
pub mod griewank;
pub mod rastrigin;
pub mod shubert;
pub mod sphere;

pub use branin::{branin, branin_gradient};
pub use camel::{camel, camel_gradient};
pub use griewank::{griewank, griewank_gradient};
pub use rastrigin::{rastrigin, rastrigin_gradient};
pub use shubert::{shubert, shubert_gradient};
pub use sphere::{sphere, sphere_gradient};
