//! Event-recording enumerator shared by integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use strand::Enumerator;

/// Shared log of `pull:<label>` / `release:<label>` events
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Leaf enumerator that records every pull and its release
#[derive(Debug)]
pub struct Recorder<T> {
    label: String,
    items: VecDeque<T>,
    log: EventLog,
}

pub fn recorder<T>(label: &str, items: Vec<T>, log: &EventLog) -> Recorder<T> {
    Recorder {
        label: label.to_string(),
        items: items.into(),
        log: Rc::clone(log),
    }
}

impl<T> Enumerator for Recorder<T> {
    type Item = T;

    fn enumerate(&mut self) -> Option<T> {
        self.log.borrow_mut().push(format!("pull:{}", self.label));
        self.items.pop_front()
    }
}

impl<T> Drop for Recorder<T> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("release:{}", self.label));
    }
}

/// Events whose kind is `kind` (`"pull"` or `"release"`), label only
pub fn events(log: &EventLog, kind: &str) -> Vec<String> {
    let prefix = format!("{kind}:");
    log.borrow()
        .iter()
        .filter_map(|event| event.strip_prefix(&prefix).map(str::to_string))
        .collect()
}

/// Number of times `label` was released
pub fn release_count(log: &EventLog, label: &str) -> usize {
    events(log, "release").iter().filter(|l| *l == label).count()
}

/// Drain an enumerator into a vector, checking exhaustion stays sticky
pub fn drain<E: Enumerator>(enumerator: &mut E) -> Vec<E::Item> {
    let mut items = Vec::new();
    while let Some(item) = enumerator.enumerate() {
        items.push(item);
    }
    for _ in 0..3 {
        assert!(enumerator.enumerate().is_none(), "exhaustion must be idempotent");
    }
    items
}
