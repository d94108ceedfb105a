/// Fixed delay before a simulated reply is appended.
pub const REPLY_DELAY_MS: u64 = 1000;

const WELCOME: &str = "Welcome to Stratum. I'm your assistant and can help you analyze the data \
                       within your strata. What would you like to know?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    System,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingReply {
    due_ms: u64,
    text: String,
}

/// Simulated assistant conversation: every user message gets one echoed
/// reply after a fixed delay.
///
/// The delay is modeled as an explicit pending queue polled with a
/// caller-supplied clock, so the surface stays free of timers. There is no
/// cancellation: a panel closed before the delay elapses simply stops
/// polling, and the queued reply still lands if the thread is polled
/// again.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantThread {
    messages: Vec<Message>,
    pending: Vec<PendingReply>,
    next_user_seq: u64,
    next_system_seq: u64,
}

impl AssistantThread {
    pub fn new(now_ms: u64) -> Self {
        Self {
            messages: vec![Message {
                id: "welcome".to_string(),
                text: WELCOME.to_string(),
                sender: Sender::System,
                timestamp_ms: now_ms,
            }],
            pending: Vec::new(),
            next_user_seq: 1,
            next_system_seq: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Appends the user message and queues the simulated reply. Blank
    /// input is ignored.
    pub fn send(&mut self, text: &str, now_ms: u64) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.messages.push(Message {
            id: format!("user-{}", self.next_user_seq),
            text: text.to_string(),
            sender: Sender::User,
            timestamp_ms: now_ms,
        });
        self.next_user_seq += 1;

        self.pending.push(PendingReply {
            due_ms: now_ms + REPLY_DELAY_MS,
            text: format!(
                "This is a simulated response to \"{text}\". In a real deployment this would \
                 connect to an inference service to provide insights about your data."
            ),
        });
    }

    /// Appends every queued reply whose delay has elapsed. Returns how
    /// many were appended. Replies land in queue order; the queue is
    /// append-only with a fixed delay, so that order is also due order.
    pub fn poll(&mut self, now_ms: u64) -> usize {
        let mut appended = 0;
        while let Some(reply) = self.pending.first() {
            if reply.due_ms > now_ms {
                break;
            }
            let reply = self.pending.remove(0);
            self.messages.push(Message {
                id: format!("system-{}", self.next_system_seq),
                text: reply.text,
                sender: Sender::System,
                timestamp_ms: reply.due_ms,
            });
            self.next_system_seq += 1;
            appended += 1;
        }
        appended
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{AssistantThread, REPLY_DELAY_MS, Sender};

    #[test]
    fn starts_with_a_welcome_message() {
        let thread = AssistantThread::new(0);
        assert_eq!(thread.messages().len(), 1);
        assert_eq!(thread.messages()[0].sender, Sender::System);
        assert_eq!(thread.messages()[0].id, "welcome");
    }

    #[test]
    fn reply_appears_only_after_the_delay() {
        let mut thread = AssistantThread::new(0);
        thread.send("how dense are the strata?", 10);
        assert_eq!(thread.messages().len(), 2);
        assert_eq!(thread.pending_replies(), 1);

        assert_eq!(thread.poll(10 + REPLY_DELAY_MS - 1), 0);
        assert_eq!(thread.poll(10 + REPLY_DELAY_MS), 1);
        assert_eq!(thread.pending_replies(), 0);

        let reply = thread.messages().last().unwrap();
        assert_eq!(reply.sender, Sender::System);
        assert!(reply.text.contains("how dense are the strata?"));
        assert_eq!(reply.timestamp_ms, 10 + REPLY_DELAY_MS);
    }

    #[test]
    fn replies_land_in_send_order() {
        let mut thread = AssistantThread::new(0);
        thread.send("first", 0);
        thread.send("second", 100);
        assert_eq!(thread.poll(2000), 2);
        let texts: Vec<&str> = thread
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert!(texts[3].contains("first"));
        assert!(texts[4].contains("second"));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut thread = AssistantThread::new(0);
        thread.send("   ", 0);
        assert_eq!(thread.messages().len(), 1);
        assert_eq!(thread.pending_replies(), 0);
    }

    #[test]
    fn pending_replies_survive_until_polled() {
        let mut thread = AssistantThread::new(0);
        thread.send("still here?", 0);
        // Nothing polls for a long while; the reply is not dropped.
        assert_eq!(thread.pending_replies(), 1);
        assert_eq!(thread.poll(1_000_000), 1);
    }
}
