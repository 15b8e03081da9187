/*!
 * Monitoring Module
 * Tracing subscriber setup
 */

mod tracer;

pub use tracer::init_tracing;
