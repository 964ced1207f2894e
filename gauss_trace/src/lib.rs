pub mod augmented_matrix;
pub mod elimination;
pub mod input;
pub mod trace;
