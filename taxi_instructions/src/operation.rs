#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Departing,
    Landing,
    Unspecified,
}

impl OperationKind {
    /// Reads the pilot's answer to the operation prompt. `None` is a cancelled
    /// prompt and, like any unrecognized word, is unspecified.
    pub fn from_input(input: Option<&str>) -> Self {
        let Some(word) = input else {
            return Self::Unspecified;
        };
        if word.eq_ignore_ascii_case("departing") {
            Self::Departing
        } else if word.eq_ignore_ascii_case("landing") {
            Self::Landing
        } else {
            Self::Unspecified
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Departing => "departing",
            Self::Landing => "landing",
            Self::Unspecified => "unspecified",
        }
    }
}
