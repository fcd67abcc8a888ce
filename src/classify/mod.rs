pub(crate) mod axis;
