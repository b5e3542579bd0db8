pub mod collapse;

pub use collapse::{Collapse, CollapseProps};
