/// Question counts offered on the quiz start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityPreset {
    Fifteen,
    Fifty,
    All,
}

impl QuantityPreset {
    /// Number of questions this preset asks for out of `available`.
    ///
    /// Fixed presets are not clamped: asking for 50 out of 20 stays 50 and is
    /// rejected when the quiz starts.
    #[must_use]
    pub fn resolve(self, available: usize) -> usize {
        match self {
            Self::Fifteen => 15,
            Self::Fifty => 50,
            Self::All => available,
        }
    }
}
