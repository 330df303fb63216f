#![cfg_attr(target_os = "none", no_std)]

pub(crate) mod fmt;

pub mod bench;
pub mod calibration;
pub mod config;
pub mod frame;
pub mod sensor;
pub mod torque;

#[cfg(test)]
pub mod tests {

    #[cfg(feature = "log")]
    #[cfg_attr(feature = "log", ctor::ctor)]
    fn init() {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_thread_names(true)
            .with_level(true)
            .pretty()
            .init();
    }
}
