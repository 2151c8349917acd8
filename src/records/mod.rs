pub mod model;
pub mod store;

pub use model::SavedRecord;
pub use store::RecordStore;
