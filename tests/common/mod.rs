//! Event-log parsing and the protocol checks every run must pass.

#![allow(dead_code)]

use post_office::model::ServiceKind;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Actor {
    pub tag: String,
    pub id: u32,
}

#[derive(Debug, Clone)]
pub struct Line {
    pub seq: u64,
    pub actor: Option<Actor>,
    pub message: String,
}

pub fn parse(raw: &str) -> Line {
    let (seq, rest) = raw.split_once(": ").unwrap_or_else(|| panic!("malformed line: {raw}"));
    let seq = seq.parse().unwrap_or_else(|_| panic!("bad sequence number: {raw}"));
    match rest.split_once(": ") {
        Some((who, message)) => {
            let (tag, id) = who.split_once(' ').unwrap_or_else(|| panic!("bad actor: {raw}"));
            Line {
                seq,
                actor: Some(Actor {
                    tag: tag.to_string(),
                    id: id.parse().unwrap_or_else(|_| panic!("bad actor id: {raw}")),
                }),
                message: message.to_string(),
            }
        }
        None => Line {
            seq,
            actor: None,
            message: rest.to_string(),
        },
    }
}

/// Parsed log with per-actor views.
pub struct Log {
    pub lines: Vec<Line>,
}

impl Log {
    pub fn new(raw: &[String]) -> Self {
        Self {
            lines: raw.iter().map(|l| parse(l)).collect(),
        }
    }

    /// Messages of one actor, in log order.
    pub fn of(&self, tag: &str, id: u32) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| matches!(&l.actor, Some(a) if a.tag == tag && a.id == id))
            .map(|l| l.message.as_str())
            .collect()
    }

    pub fn actors(&self, tag: &str) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .lines
            .iter()
            .filter_map(|l| l.actor.as_ref())
            .filter(|a| a.tag == tag)
            .map(|a| a.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn count(&self, tag: &str, message: &str) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(&l.actor, Some(a) if a.tag == tag) && l.message == message)
            .count()
    }

    pub fn closing_positions(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.actor.is_none())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Service kind named by a message starting with `prefix`, if any.
fn service_of(message: &str, prefix: &str) -> Option<ServiceKind> {
    let number = message.strip_prefix(prefix)?;
    let kind = number
        .parse()
        .ok()
        .and_then(ServiceKind::from_number)
        .unwrap_or_else(|| panic!("unknown service kind in {message:?}"));
    Some(kind)
}

/// Asserts every structural property of a completed run.
pub fn check_protocol(raw: &[String], customers: u32, clerks: u32) -> Log {
    let log = Log::new(raw);

    // Sequence integrity: exactly 1..=K, in order.
    for (i, line) in log.lines.iter().enumerate() {
        assert_eq!(line.seq, i as u64 + 1, "sequence broken at {raw:?}", raw = raw[i]);
    }

    // Exactly one closing line.
    let closing = log.closing_positions();
    assert_eq!(closing.len(), 1, "expected one closing line");
    assert_eq!(log.lines[closing[0]].message, "closing");
    let closing_at = closing[0];

    assert_eq!(log.actors("Z"), (1..=customers).collect::<Vec<_>>());
    assert_eq!(log.actors("U"), (1..=clerks).collect::<Vec<_>>());

    // Customers: either turned away or served exactly once.
    for id in 1..=customers {
        let msgs = log.of("Z", id);
        match msgs.as_slice() {
            ["started", "going home"] => {}
            ["started", entering, "called by office worker", "going home"] => {
                assert!(
                    service_of(entering, "entering office for a service ").is_some(),
                    "customer {id}: {msgs:?}"
                );
            }
            other => panic!("customer {id} has an invalid lifecycle: {other:?}"),
        }
    }

    // Clerks: started first, going home last and once, serve/finish strictly paired.
    for id in 1..=clerks {
        let msgs = log.of("U", id);
        assert_eq!(msgs.first(), Some(&"started"), "clerk {id}: {msgs:?}");
        assert_eq!(msgs.last(), Some(&"going home"), "clerk {id}: {msgs:?}");
        assert_eq!(msgs.iter().filter(|m| **m == "going home").count(), 1);

        let mut serving = false;
        let mut on_break = false;
        for msg in &msgs[1..msgs.len() - 1] {
            match *msg {
                m if m.starts_with("serving a service of type ") => {
                    assert!(!serving && !on_break, "clerk {id}: {msgs:?}");
                    serving = true;
                }
                "service finished" => {
                    assert!(serving, "clerk {id}: finished without serving");
                    serving = false;
                }
                "taking break" => {
                    assert!(!serving && !on_break, "clerk {id}: {msgs:?}");
                    on_break = true;
                }
                "break finished" => {
                    assert!(on_break, "clerk {id}: break finished without break");
                    on_break = false;
                }
                other => panic!("clerk {id}: unexpected message {other:?}"),
            }
        }
        assert!(!serving && !on_break, "clerk {id} went home mid-task");
    }

    // Queue replay: never negative, fully drained at the end.
    let mut waiting: HashMap<ServiceKind, i64> = HashMap::new();
    for (i, line) in log.lines.iter().enumerate() {
        if let Some(kind) = service_of(&line.message, "entering office for a service ") {
            assert!(i < closing_at, "customer entered after closing: {}", raw[i]);
            *waiting.entry(kind).or_default() += 1;
        }
        if let Some(kind) = service_of(&line.message, "serving a service of type ") {
            let n = waiting.entry(kind).or_default();
            *n -= 1;
            assert!(*n >= 0, "queue {kind} went negative at {}", raw[i]);
        }
    }
    assert!(waiting.values().all(|n| *n == 0), "undrained queues: {waiting:?}");

    // One going home per actor.
    assert_eq!(
        log.count("Z", "going home") + log.count("U", "going home"),
        (customers + clerks) as usize
    );

    log
}
