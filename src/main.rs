/// Binary entrypoint for the `gcscan` executable.
///
/// Keeps the binary thin — all logic lives in the `gcscan_lib` crate so tests
/// can drive the calculator and the loop directly.
fn main() {
    gcscan_lib::run();
}
