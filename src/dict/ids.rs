use uuid::Uuid;

/// Source of row identifiers for generated inserts
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers (`{prefix}-0001`, `{prefix}-0002`, ...)
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{:04}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
