use std::fmt;

/// Progress of a single decode call.
///
/// A call moves forward through `Idle -> HeaderParsed -> ArraysAllocated -> Decoding -> Done`.
/// `Failed` is reachable from every non-terminal stage. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStage {
    Idle,
    HeaderParsed,
    ArraysAllocated,
    Decoding,
    Done,
    Failed,
}

impl DecodeStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// The next stage on the success path. Terminal stages stay where they are.
    pub fn advance(self) -> Self {
        match self {
            Self::Idle => Self::HeaderParsed,
            Self::HeaderParsed => Self::ArraysAllocated,
            Self::ArraysAllocated => Self::Decoding,
            Self::Decoding => Self::Done,
            Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }

    /// Moves to `Failed`, unless the call already completed.
    pub fn fail(self) -> Self {
        match self {
            Self::Done => Self::Done,
            _ => Self::Failed,
        }
    }
}

impl fmt::Display for DecodeStage {
    /// Describes the work done while leaving this stage.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let activity = match self {
            Self::Idle => "reading header",
            Self::HeaderParsed => "allocating arrays",
            Self::ArraysAllocated | Self::Decoding => "decoding records",
            Self::Done => "finishing",
            Self::Failed => "recovering from a failure",
        };
        f.write_str(activity)
    }
}
