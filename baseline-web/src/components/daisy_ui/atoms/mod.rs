pub mod link;

pub use link::{Link, LinkProps};
