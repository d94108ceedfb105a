/// One recorded workspace transition, for traceability.
///
/// Structured text for now; can become a stable, serializable enum if a
/// consumer needs to replay transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    pub seq: u64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct TransitionLog {
    events: Vec<TransitionEvent>,
    next_seq: u64,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, kind: &'static str, message: impl Into<String>) {
        self.events.push(TransitionEvent {
            seq: self.next_seq,
            kind,
            message: message.into(),
        });
        self.next_seq += 1;
    }

    pub fn events(&self) -> &[TransitionEvent] {
        &self.events
    }

    /// Takes the buffered events; sequence numbers keep counting.
    pub fn drain(&mut self) -> Vec<TransitionEvent> {
        std::mem::take(&mut self.events)
    }
}
