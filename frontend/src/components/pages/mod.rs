pub mod aperture_iq;
pub mod call_clerk;
pub mod estate_beacon;
