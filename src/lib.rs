pub mod api;
pub mod config;
pub mod connection;
pub mod database;
pub mod draw;
pub mod errors;
pub mod frequency;
pub mod logging;
pub mod page;
pub mod store;
pub mod types;
pub mod use_cases;
pub mod utils;

pub use draw::{DrawSource, OsDrawSource, generate_draw};
pub use errors::{GenerationError, LottoError, StorageError};
pub use frequency::aggregate;
pub use store::{DrawStore, SqliteDrawStore};
pub use types::*;
pub use use_cases::DrawUseCase;
