//! Run parameters and their validation.

/// Largest allowed customer arrival bound (`TZ`), in milliseconds.
pub const ARRIVAL_MAX_MS: u64 = 10_000;
/// Largest allowed clerk break bound (`TU`), in milliseconds.
pub const BREAK_MAX_MS: u64 = 100;
/// Largest allowed closing bound (`F`), in milliseconds.
pub const CLOSING_MAX_MS: u64 = 10_000;

/// Errors raised while validating run parameters.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} = {value} is out of range [0, {max}]")]
    OutOfRange {
        name: &'static str,
        value: u64,
        max: u64,
    },
    #[error("{customers} customer(s) but no clerk to serve them")]
    NoClerks { customers: u32 },
}

/// The five parameters of one run: `NZ NU TZ TU F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// `NZ`
    pub customers: u32,
    /// `NU`
    pub clerks: u32,
    /// `TZ`: customers arrive after `[0, TZ]` ms.
    pub customer_arrival_max_ms: u64,
    /// `TU`: clerk breaks last `[0, TU]` ms.
    pub clerk_break_max_ms: u64,
    /// `F`: the office closes after `[F/2, F]` ms.
    pub closing_max_ms: u64,
}

impl SimConfig {
    pub fn new(
        customers: u32,
        clerks: u32,
        customer_arrival_max_ms: u64,
        clerk_break_max_ms: u64,
        closing_max_ms: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            customers,
            clerks,
            customer_arrival_max_ms,
            clerk_break_max_ms,
            closing_max_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges, and that every customer who gets in can be served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("TZ", self.customer_arrival_max_ms, ARRIVAL_MAX_MS)?;
        check_range("TU", self.clerk_break_max_ms, BREAK_MAX_MS)?;
        check_range("F", self.closing_max_ms, CLOSING_MAX_MS)?;
        if self.clerks == 0 && self.customers > 0 {
            return Err(ConfigError::NoClerks {
                customers: self.customers,
            });
        }
        Ok(())
    }
}

fn check_range(name: &'static str, value: u64, max: u64) -> Result<(), ConfigError> {
    if value > max {
        Err(ConfigError::OutOfRange { name, value, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_inclusive() {
        assert!(SimConfig::new(3, 2, 10_000, 100, 10_000).is_ok());
        assert!(SimConfig::new(0, 0, 0, 0, 0).is_ok());
        assert!(SimConfig::new(0, 1, 0, 0, 0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_times() {
        assert_eq!(
            SimConfig::new(1, 1, 10_001, 0, 0),
            Err(ConfigError::OutOfRange { name: "TZ", value: 10_001, max: 10_000 })
        );
        assert_eq!(
            SimConfig::new(1, 1, 0, 101, 0),
            Err(ConfigError::OutOfRange { name: "TU", value: 101, max: 100 })
        );
        let err = SimConfig::new(1, 1, 0, 0, 20_000).unwrap_err();
        assert_eq!(err.to_string(), "F = 20000 is out of range [0, 10000]");
    }

    #[test]
    fn rejects_customers_without_clerks() {
        assert_eq!(
            SimConfig::new(4, 0, 0, 0, 0),
            Err(ConfigError::NoClerks { customers: 4 })
        );
    }
}
