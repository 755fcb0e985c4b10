pub mod event_store;
pub mod postgres_store;
pub mod supabase_store;

pub use event_store::{connect, EventStore};
pub use postgres_store::PgEventStore;
pub use supabase_store::SupabaseEventStore;
