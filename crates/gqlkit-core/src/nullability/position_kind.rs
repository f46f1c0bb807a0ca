/// Whether a type position receives input (parameters and input object
/// fields) or produces output (object and interface fields).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum PositionKind {
    Input,
    Output,
}
impl PositionKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}
