mod helpers;
mod isolation;
mod telemetry;
