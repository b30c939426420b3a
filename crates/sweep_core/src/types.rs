#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub request: String,
    #[allow(dead_code)]
    pub kind: SpecKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecKind {
    /// `import ... from '<spec>'`
    Binding,
    /// `import '<spec>'`
    SideEffect,
}
