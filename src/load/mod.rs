//! The load engine: endpoint selection, workers, sample recording and the
//! coordinator that ties them to one deadline.
mod coordinator;
mod endpoint;
mod recorder;
mod run_config;
mod worker;


pub use coordinator::run_load;
pub use endpoint::{Endpoint, EndpointSelector};
pub use recorder::{SampleRecorder, SampleSet};
pub use run_config::RunConfig;
pub use worker::WorkerExit;
