//! Service layer for cashflow-cli
//!
//! Services sit between the input/output boundaries and the analysis engine:
//! CSV ingestion produces the raw records the store loads, and the simulator
//! answers hypothetical balance questions against a loaded snapshot.

pub mod import;
pub mod simulation;

pub use import::{read_csv_file, read_records_from_reader, ColumnMapping};
pub use simulation::{simulate, SimulationResult};
