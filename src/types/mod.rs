pub(crate) mod primitives;
