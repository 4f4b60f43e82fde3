//! Infrastructure: port traits and concrete adapters.

pub mod clock;
pub mod memory;
pub mod ports;
pub mod sqlite;

pub use clock::{FixedClock, FixedRandom, SystemClock, SystemRandom};
pub use memory::MemoryUserRepo;
pub use sqlite::SqliteUserRepo;
