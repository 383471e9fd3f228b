use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_FRESH: AtomicUsize = AtomicUsize::new(0);

/// A process-wide fresh name. Every name issued is distinct from every name
/// issued before it, and the `#` prefix keeps it out of the namespace of
/// ordinary user-supplied port names.
pub fn fresh_name() -> String {
    let id = NEXT_FRESH.fetch_add(1, Ordering::SeqCst);
    format!("#fresh_{id}")
}

/// A deterministic counter-based name generator. Unlike [fresh_name], the
/// sequence restarts for every instance, which makes latch-cutting and
/// anonymous naming reproducible under test.
#[derive(Debug, Clone)]
pub struct FreshNames {
    prefix: String,
    next: usize,
}

impl FreshNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    pub fn fresh(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        format!("{prefix}{id}", prefix = self.prefix)
    }
}
