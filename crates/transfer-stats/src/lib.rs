// Library root for the transfer-stats binary: configuration and the report
// pipeline, exposed so integration tests can drive a full run.

pub mod config;
pub mod run;
