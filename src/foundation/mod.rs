pub(crate) mod coords;
pub(crate) mod error;
