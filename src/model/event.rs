use super::ServiceKind;
use std::fmt;

/// The kind of actor that writes a tagged log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A customer, tagged `Z`.
    Customer,
    /// An office clerk, tagged `U`.
    Clerk,
}

impl Role {
    pub const fn tag(self) -> &'static str {
        match self {
            Role::Customer => "Z",
            Role::Clerk => "U",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Identity of a log writer, rendered as `"<tag> <id>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorTag {
    pub role: Role,
    pub id: u32,
}

impl ActorTag {
    pub const fn customer(id: u32) -> Self {
        Self { role: Role::Customer, id }
    }

    pub const fn clerk(id: u32) -> Self {
        Self { role: Role::Clerk, id }
    }
}

impl fmt::Display for ActorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.role, self.id)
    }
}

/// Every milestone that ends up in the event log.
///
/// `Display` yields the message part of the line only; sequence number and
/// actor tag are added by the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Started,
    GoingHome,
    /// Customer joined the queue for a kind.
    Entering(ServiceKind),
    /// Customer was woken by a clerk.
    Called,
    /// Clerk took one unit from a queue.
    Serving(ServiceKind),
    ServiceFinished,
    TakingBreak,
    BreakFinished,
    /// Coordinator closed the office. Written without a tag.
    Closing,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Started => f.write_str("started"),
            Event::GoingHome => f.write_str("going home"),
            Event::Entering(kind) => write!(f, "entering office for a service {kind}"),
            Event::Called => f.write_str("called by office worker"),
            Event::Serving(kind) => write!(f, "serving a service of type {kind}"),
            Event::ServiceFinished => f.write_str("service finished"),
            Event::TakingBreak => f.write_str("taking break"),
            Event::BreakFinished => f.write_str("break finished"),
            Event::Closing => f.write_str("closing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_as_logged() {
        assert_eq!(Event::Entering(ServiceKind::Packages).to_string(), "entering office for a service 2");
        assert_eq!(Event::Serving(ServiceKind::Letters).to_string(), "serving a service of type 1");
        assert_eq!(Event::Called.to_string(), "called by office worker");
        assert_eq!(ActorTag::clerk(4).to_string(), "U 4");
        assert_eq!(ActorTag::customer(12).to_string(), "Z 12");
    }
}
