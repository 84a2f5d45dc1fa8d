pub(crate) mod heading;
