//! Fixed-size deferred message ring.
//!
//! Posting coalesces: a new message replaces any pending message with the
//! same target and kind, so a burst of invalidations costs one delivery.
//! When the ring is full the oldest slot is overwritten.

use crate::message::{Message, MessageKind};
use crate::window::WindowId;

/// Number of slots in the ring.
pub const QUEUE_CAPACITY: usize = 256;

/// Where a posted message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Window(WindowId),
    /// Screen-wide work not tied to a window; currently the stencil refresh.
    Screen,
}

#[derive(Debug)]
pub struct PostedMessage {
    pub target: Target,
    pub message: Message,
}

impl PostedMessage {
    fn matches(&self, target: Target, kind: MessageKind) -> bool {
        self.target == target && self.message.kind() == kind
    }
}

/// Counters describing queue traffic since creation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    pub posted: u64,
    /// Pending messages replaced by a newer post of the same target and kind.
    pub coalesced: u64,
    /// Live messages lost to overflow.
    pub dropped: u64,
    pub delivered: u64,
}

pub struct MessageQueue {
    slots: Box<[Option<PostedMessage>]>,
    read: u8,
    write: u8,
    len: usize,
    stats: QueueStats,
}

const _: () = assert!(QUEUE_CAPACITY == u8::MAX as usize + 1);

impl MessageQueue {
    pub fn new() -> Self {
        Self {
            slots: (0..QUEUE_CAPACITY).map(|_| None).collect(),
            read: 0,
            write: 0,
            len: 0,
            stats: QueueStats::default(),
        }
    }

    /// Occupied slots, counting entries emptied by coalescing or purging.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Messages that will actually be delivered.
    pub fn pending(&self) -> usize {
        self.occupied().filter(|slot| slot.is_some()).count()
    }

    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = &PostedMessage> {
        self.occupied().filter_map(Option::as_ref)
    }

    /// Enqueue `message`, first removing any pending message it supersedes.
    ///
    /// Returns the message lost to overflow, if any.
    pub fn push(&mut self, target: Target, message: Message) -> Option<PostedMessage> {
        let kind = message.kind();
        for offset in 0..self.len {
            let index = self.read.wrapping_add(offset as u8) as usize;
            if self.slots[index]
                .as_ref()
                .is_some_and(|posted| posted.matches(target, kind))
            {
                self.slots[index] = None;
                self.stats.coalesced += 1;
            }
        }

        let mut dropped = None;
        if self.len == QUEUE_CAPACITY {
            dropped = self.slots[self.read as usize].take();
            self.read = self.read.wrapping_add(1);
            self.len -= 1;
            if let Some(lost) = &dropped {
                self.stats.dropped += 1;
                tracing::warn!(
                    target = ?lost.target,
                    kind = ?lost.message.kind(),
                    "message queue full, dropping oldest message"
                );
            }
        }

        self.slots[self.write as usize] = Some(PostedMessage { target, message });
        self.write = self.write.wrapping_add(1);
        self.len += 1;
        self.stats.posted += 1;
        dropped
    }

    /// Take the oldest slot. The inner `None` is a slot emptied after posting.
    pub fn pop(&mut self) -> Option<Option<PostedMessage>> {
        if self.len == 0 {
            return None;
        }
        let slot = self.slots[self.read as usize].take();
        self.read = self.read.wrapping_add(1);
        self.len -= 1;
        Some(slot)
    }

    /// Empty every pending slot addressed to `window`.
    pub fn purge(&mut self, window: WindowId) -> usize {
        let target = Target::Window(window);
        let mut purged = 0;
        for offset in 0..self.len {
            let index = self.read.wrapping_add(offset as u8) as usize;
            if self.slots[index]
                .as_ref()
                .is_some_and(|posted| posted.target == target)
            {
                self.slots[index] = None;
                purged += 1;
            }
        }
        purged
    }

    pub(crate) fn record_delivery(&mut self) {
        self.stats.delivered += 1;
    }

    fn occupied(&self) -> impl Iterator<Item = &Option<PostedMessage>> {
        (0..self.len).map(move |offset| &self.slots[self.read.wrapping_add(offset as u8) as usize])
    }
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Payload;

    fn user(n: u32) -> Message {
        Message::user(MessageKind::user(n), n, None)
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = MessageQueue::new();
        queue.push(Target::Screen, user(1));
        queue.push(Target::Screen, user(2));
        queue.push(Target::Screen, user(3));

        let kinds: Vec<_> = std::iter::from_fn(|| queue.pop())
            .flatten()
            .map(|posted| posted.message.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![MessageKind(1001), MessageKind(1002), MessageKind(1003)]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_coalesce_keeps_newest_payload() {
        let mut queue = MessageQueue::new();
        queue.push(Target::Screen, Message::user(MessageKind::USER, 1, None));
        queue.push(
            Target::Screen,
            Message::user(MessageKind::USER, 2, Some(Payload::new("new"))),
        );

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.stats().coalesced, 1);

        let posted = queue.iter().next().unwrap();
        match &posted.message {
            Message::User { wparam, lparam, .. } => {
                assert_eq!(*wparam, 2);
                assert_eq!(
                    lparam.as_ref().and_then(|p| p.downcast_ref::<&str>()),
                    Some(&"new")
                );
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut queue = MessageQueue::new();
        for n in 0..QUEUE_CAPACITY as u32 {
            assert!(queue.push(Target::Screen, user(n)).is_none());
        }
        assert_eq!(queue.len(), QUEUE_CAPACITY);

        let dropped = queue.push(Target::Screen, user(9999)).unwrap();
        assert_eq!(dropped.message.kind(), MessageKind::user(0));
        assert_eq!(queue.stats().dropped, 1);
        assert_eq!(queue.len(), QUEUE_CAPACITY);

        let first = queue.pop().flatten().unwrap();
        assert_eq!(first.message.kind(), MessageKind::user(1));
    }

    #[test]
    fn test_indices_wrap() {
        let mut queue = MessageQueue::new();
        for round in 0..3 {
            for n in 0..200 {
                queue.push(Target::Screen, user(round * 1000 + n));
            }
            while queue.pop().is_some() {}
        }
        assert!(queue.is_empty());
        assert_eq!(queue.stats().posted, 600);
        assert_eq!(queue.stats().dropped, 0);
    }
}
