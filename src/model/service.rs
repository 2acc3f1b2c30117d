use std::fmt;

/// One of the three services the office offers.
///
/// Each kind has its own queue counter and its own wake signal. In the event
/// log a kind is written as its number (see [`ServiceKind::number`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Letters,
    Packages,
    Money,
}

/// The order in which a clerk scans the queues during one serve attempt.
pub type ScanOrder = [ServiceKind; 3];

impl ServiceKind {
    /// All kinds, in index order.
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Letters, ServiceKind::Packages, ServiceKind::Money];

    /// Slot of this kind in per-kind arrays.
    pub const fn index(self) -> usize {
        match self {
            ServiceKind::Letters => 0,
            ServiceKind::Packages => 1,
            ServiceKind::Money => 2,
        }
    }

    /// Number used for this kind in log lines: Letters=1, Packages=2, Money=3.
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`ServiceKind::number`].
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(ServiceKind::Letters),
            2 => Some(ServiceKind::Packages),
            3 => Some(ServiceKind::Money),
            _ => None,
        }
    }

    /// Scan order starting at `ALL[start % 3]` and wrapping around.
    ///
    /// Only the three rotations are reachable (L-P-M, P-M-L, M-L-P), never the
    /// other three permutations.
    pub fn rotation(start: usize) -> ScanOrder {
        let start = start % 3;
        [
            Self::ALL[start],
            Self::ALL[(start + 1) % 3],
            Self::ALL[(start + 2) % 3],
        ]
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
