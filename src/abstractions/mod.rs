/*!

Facilities that abstract over the implementing backing crate. Currently this is only logging, which is backed by
`tracing` but exposed through our own threshold-aware macros so that the backend can be swapped out.

*/

// Logging
pub mod log;
