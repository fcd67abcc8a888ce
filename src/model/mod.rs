pub(crate) mod machine;
pub(crate) mod registry;
pub(crate) mod state;
pub(crate) mod transition;
