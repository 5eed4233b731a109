pub(crate) mod interp;
pub(crate) mod value;
