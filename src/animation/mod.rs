pub(crate) mod anim;
pub(crate) mod keyframe;
pub(crate) mod sensor;
