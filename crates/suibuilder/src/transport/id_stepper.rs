use crate::prelude::*;

/// Monotonically increasing JSON-RPC request ids, starting at 1.
#[derive(Debug, Default)]
pub struct IdStepper(RwLock<u64>);

impl IdStepper {
    pub fn next(&self) -> u64 {
        let mut id = match self.0.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *id += 1;
        *id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn steps_from_one() {
        let sut = IdStepper::default();
        assert_eq!(sut.next(), 1);
        assert_eq!(sut.next(), 2);
        assert_eq!(sut.next(), 3);
    }
}
