// Pattern: Singleton
// One shared database handle. The preferred form is an explicitly built
// context that owns the handle and is passed to its clients; the lazily
// initialised global is kept for code that cannot be handed a context.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::info;

// ============================================================================
// Example: The shared resource
// ============================================================================

#[derive(Debug, Default)]
pub struct Database {
    queries: AtomicUsize,
}

impl Database {
    fn new() -> Self {
        info!("opening database handle");
        Self::default()
    }

    pub fn query(&self, sql: &str) -> String {
        self.queries.fetch_add(1, Ordering::Relaxed);
        format!("Querying database: {sql}")
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    /// Process-wide instance, created on first access.
    pub fn global() -> &'static Database {
        static INSTANCE: OnceLock<Database> = OnceLock::new();
        INSTANCE.get_or_init(Database::new)
    }
}

// ============================================================================
// Example: Explicit context (preferred over the global)
// ============================================================================

#[derive(Debug)]
pub struct DatabaseContext {
    database: Rc<Database>,
    handed_out: Cell<usize>,
}

impl DatabaseContext {
    pub fn new() -> Self {
        Self {
            database: Rc::new(Database::new()),
            handed_out: Cell::new(0),
        }
    }

    /// Every call returns the same instance.
    pub fn database(&self) -> Rc<Database> {
        self.handed_out.set(self.handed_out.get() + 1);
        Rc::clone(&self.database)
    }

    pub fn handed_out(&self) -> usize {
        self.handed_out.get()
    }
}

impl Default for DatabaseContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A client that receives its database instead of reaching for a global.
pub struct UserRepository {
    db: Rc<Database>,
}

impl UserRepository {
    pub fn new(context: &DatabaseContext) -> Self {
        Self {
            db: context.database(),
        }
    }

    pub fn all_users(&self) -> String {
        self.db.query("SELECT * FROM users")
    }
}

fn identity_verdict(same: bool) -> &'static str {
    if same {
        "The same instance of Database was returned. The Singleton pattern works!"
    } else {
        "A new instance of Database was returned. The Singleton pattern failed."
    }
}

pub fn run_demo() {
    let context = DatabaseContext::new();
    let repository = UserRepository::new(&context);
    println!("{}", repository.all_users());

    let first = context.database();
    let second = context.database();
    println!("{}", identity_verdict(Rc::ptr_eq(&first, &second)));

    println!("Global accessor:");
    let global = Database::global();
    println!("{}", global.query("SELECT count(*) FROM sessions"));
    println!("{}", identity_verdict(std::ptr::eq(global, Database::global())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_identity() {
        let first = Database::global();
        let second = Database::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_context_hands_out_one_instance() {
        let context = DatabaseContext::new();
        let a = context.database();
        let b = context.database();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(context.handed_out(), 2);
    }

    #[test]
    fn test_clients_share_the_context_instance() {
        let context = DatabaseContext::new();
        let repo_a = UserRepository::new(&context);
        let repo_b = UserRepository::new(&context);

        repo_a.all_users();
        repo_b.all_users();

        assert_eq!(context.database().query_count(), 2);
    }

    #[test]
    fn test_separate_contexts_are_isolated() {
        let one = DatabaseContext::new();
        let two = DatabaseContext::new();
        assert!(!Rc::ptr_eq(&one.database(), &two.database()));
    }

    #[test]
    fn test_query_text() {
        let context = DatabaseContext::new();
        assert_eq!(
            UserRepository::new(&context).all_users(),
            "Querying database: SELECT * FROM users"
        );
    }
}
