use log::debug;

/// Classification of a console line. Selects the channel the line is
/// presented on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Info,
    Error,
    Combat,
    Warning,
    /// A tag this client does not know about. Presented as `Info`.
    Unrecognized(u8),
}

impl MessageKind {
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Self::Info,
            1 => Self::Error,
            2 => Self::Combat,
            3 => Self::Warning,
            other => {
                debug!("Unrecognized console message tag: {}", other);
                Self::Unrecognized(other)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleMessage {
    pub kind: MessageKind,
    pub message: String,
}

impl ConsoleMessage {
    pub fn new(kind: MessageKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, message)
    }

    pub fn combat(message: impl Into<String>) -> Self {
        Self::new(MessageKind::Combat, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, message)
    }
}
