pub(crate) mod blend;
pub(crate) mod rgbwa;
