pub mod catalog;
pub mod error;
pub mod instruction;
pub mod operation;
pub mod procedure;
pub mod router;

pub use catalog::AirportCatalog;
pub use operation::OperationKind;
pub use router::{AtcRouter, DisplayPort, InputPort};
