pub(crate) mod anchors;
pub(crate) mod blender;
pub(crate) mod merge;
