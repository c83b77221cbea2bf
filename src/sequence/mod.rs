mod sobol;

pub use sobol::{Sobol, MAX_DIMENSION, SUPPORTED_DIMENSION};
