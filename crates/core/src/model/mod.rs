mod adherence;
mod ids;
mod medicine;
mod page;
mod session;
mod summary;

pub use adherence::{Adherence, AdherenceChoice};
pub use ids::SessionId;
pub use medicine::{MedicineName, MedicineNameError};
pub use page::Page;
pub use session::Session;
pub use summary::DailySummary;
