use uuid::Uuid;

const ID_PREFIX: &str = "p_";
const MAX_ATTEMPTS: usize = 64;

pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// `p_` followed by a UUIDv7 in simple form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        format!("{ID_PREFIX}{}", Uuid::now_v7().simple())
    }
}

/// Deterministic ids for tests: `p_1`, `p_2`, ...
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

#[cfg(test)]
impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{ID_PREFIX}{}", self.next)
    }
}

/// Draws ids until one is not taken. Falls back to a suffixed candidate if the
/// generator keeps colliding.
pub fn generate_project_id<F>(ids: &mut dyn IdGenerator, mut exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    let mut last = String::new();
    for _ in 0..MAX_ATTEMPTS {
        let candidate = ids.next_id();
        if !exists(&candidate) {
            return candidate;
        }
        last = candidate;
    }

    format!("{last}_{}", &Uuid::now_v7().simple().to_string()[..8])
}
