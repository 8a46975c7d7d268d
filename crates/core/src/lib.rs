pub mod border;
pub mod resolve;
pub mod selection;

pub use border::{border_id, BorderRecord, BorderSpec, Edge, EdgeSpec, EdgeStyle};
pub use resolve::{BorderCommand, CellOp, RangeEdgeTarget};
pub use selection::{CellCoord, CellRange, RangeSpec, Selection};
