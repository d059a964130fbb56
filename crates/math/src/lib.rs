pub mod price;
pub mod spread;

pub use price::normalize_price;
pub use spread::{divergence, Divergence};
