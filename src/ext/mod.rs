mod label_ext;

pub use label_ext::LabelExt;
