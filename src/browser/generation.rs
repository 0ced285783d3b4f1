use crate::error::{Result, RvarError};

/// Numbers issued requests so that only the latest one may update the view
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    latest: u64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier one
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn check(&self, received: u64) -> Result<()> {
        if received == self.latest {
            Ok(())
        } else {
            Err(RvarError::StaleResponse {
                received,
                latest: self.latest,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_generation_accepted() {
        let mut counter = GenerationCounter::new();
        let first = counter.issue();
        let second = counter.issue();

        assert!(counter.check(second).is_ok());
        assert!(matches!(
            counter.check(first),
            Err(RvarError::StaleResponse { received: 1, latest: 2 })
        ));
    }

    #[test]
    fn test_nothing_issued_rejects_everything() {
        let counter = GenerationCounter::new();
        assert!(counter.check(1).is_err());
    }
}
