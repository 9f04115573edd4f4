pub mod download_simulator;

pub use download_simulator::{DownloadSimulator, SimulationEvent};
