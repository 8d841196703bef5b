pub trait LabelExt {
    /// Trimmed label, or `None` when nothing but whitespace is left.
    fn as_label(&self) -> Option<&str>;
}

impl LabelExt for str {
    fn as_label(&self) -> Option<&str> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl LabelExt for String {
    fn as_label(&self) -> Option<&str> {
        self.as_str().as_label()
    }
}
