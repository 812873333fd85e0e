use calculator::Float;

/// Numeric type exchanged with the host (`double` in C).
pub type HostFloat = std::ffi::c_double;

/// Narrows a host value to the build's [`Float`]. Exact for the `f64` build.
#[allow(clippy::unnecessary_cast)]
pub fn to_core(value: HostFloat) -> Float {
    value as Float
}

/// Widens a [`Float`] back to the host type. Always exact.
#[allow(clippy::unnecessary_cast)]
pub fn to_host(value: Float) -> HostFloat {
    value as HostFloat
}
