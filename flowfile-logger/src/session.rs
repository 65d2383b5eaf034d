//! The host's unit-of-work seam.
//!
//! A [`ProcessSession`] hands out at most one flowfile per call to `get`,
//! serves its content on demand, and accepts the routing decision. The host
//! engine owns queueing, redelivery and back-pressure behind this trait.
//! [`InMemorySession`] is a queue-backed implementation for embedding and
//! tests.

use crate::flowfile::{Attributes, FlowFile};
use crate::processor::Relationship;
use std::collections::{HashMap, VecDeque};
use std::io;

#[cfg_attr(test, mockall::automock)]
pub trait ProcessSession {
    /// Next queued flowfile, if any.
    fn get(&mut self) -> Option<FlowFile>;

    /// Read the full content of a flowfile obtained from this session.
    fn read(&mut self, flowfile: &FlowFile) -> io::Result<Vec<u8>>;

    /// Route a flowfile. Consumes it: a flowfile is transferred exactly once.
    fn transfer(&mut self, flowfile: FlowFile, relationship: Relationship);
}

#[derive(Debug, Clone)]
enum Content {
    Bytes(Vec<u8>),
    Unreadable(String),
}

/// Queue-backed session.
#[derive(Debug, Default)]
pub struct InMemorySession {
    next_id: u64,
    queue: VecDeque<FlowFile>,
    contents: HashMap<u64, Content>,
    transferred: Vec<(FlowFile, Relationship)>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a flowfile and return its id.
    pub fn enqueue(&mut self, attributes: Attributes, content: impl Into<Vec<u8>>) -> u64 {
        let content = content.into();
        let size = content.len() as u64;
        self.push(attributes, size, Content::Bytes(content))
    }

    /// Queue a flowfile whose content stream fails on read.
    pub fn enqueue_unreadable(&mut self, attributes: Attributes, reason: &str) -> u64 {
        self.push(attributes, 0, Content::Unreadable(reason.to_string()))
    }

    fn push(&mut self, attributes: Attributes, size: u64, content: Content) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.queue.push_back(FlowFile::new(id, attributes, size));
        self.contents.insert(id, content);
        id
    }

    /// Flowfiles still waiting to be pulled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Every routing decision so far, in order.
    pub fn transferred(&self) -> &[(FlowFile, Relationship)] {
        &self.transferred
    }

    pub fn transferred_to(&self, relationship: Relationship) -> Vec<&FlowFile> {
        self.transferred
            .iter()
            .filter(|(_, r)| *r == relationship)
            .map(|(f, _)| f)
            .collect()
    }
}

impl ProcessSession for InMemorySession {
    fn get(&mut self) -> Option<FlowFile> {
        self.queue.pop_front()
    }

    fn read(&mut self, flowfile: &FlowFile) -> io::Result<Vec<u8>> {
        match self.contents.get(&flowfile.id()) {
            Some(Content::Bytes(bytes)) => Ok(bytes.clone()),
            Some(Content::Unreadable(reason)) => Err(io::Error::other(reason.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no content for {flowfile}"),
            )),
        }
    }

    fn transfer(&mut self, flowfile: FlowFile, relationship: Relationship) {
        self.contents.remove(&flowfile.id());
        self.transferred.push((flowfile, relationship));
    }
}
