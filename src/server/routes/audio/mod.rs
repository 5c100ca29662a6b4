//! Audio relay endpoint

mod intake;
mod relay;

pub use intake::read_relay_form;
pub use relay::relay_audio;
