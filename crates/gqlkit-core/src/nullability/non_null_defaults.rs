use crate::nullability::PositionKind;

/// Whether input and output positions are non-null when nothing more specific
/// says otherwise.
///
/// In definition documents this is the `nonNullDefaults` object:
///
/// ```json
/// { "nonNullDefaults": { "input": false, "output": true } }
/// ```
///
/// Either key may be omitted, in which case it is `false`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NonNullDefaults {
    /// Treat parameters and input object fields as non-null by default.
    #[serde(default)]
    pub input: bool,

    /// Treat object and interface fields as non-null by default.
    #[serde(default)]
    pub output: bool,
}
impl NonNullDefaults {
    pub const ALL_NON_NULL: Self = Self { input: true, output: true };
    pub const ALL_NULLABLE: Self = Self { input: false, output: false };

    pub fn new(input: bool, output: bool) -> Self {
        Self { input, output }
    }

    /// The default for positions of the given [`PositionKind`].
    pub fn for_kind(&self, kind: PositionKind) -> bool {
        match kind {
            PositionKind::Input => self.input,
            PositionKind::Output => self.output,
        }
    }
}
impl std::fmt::Display for NonNullDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{input: {}, output: {}}}", self.input, self.output)
    }
}
