use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver, Sender},
};
use embassy_time::Ticker;
use embedded_io_async::Write;

use crate::{
    config::Profile,
    frame::Frame,
    sensor::load_cell::LoadCell,
    torque::{encode_centi, torque_nm},
};

const TARE_SAMPLES: usize = 10;

/// One processed bench sample.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub torque_nm: f32,
    pub encoded: i16,
}

pub struct State<const N: usize> {
    samples: Channel<CriticalSectionRawMutex, Sample, N>,
}

impl<const N: usize> State<N> {
    pub fn new() -> Self {
        State { samples: Channel::new() }
    }
}

impl<const N: usize> Default for State<N> {
    fn default() -> Self {
        Self::new()
    }
}

pub type SampleReceiver<'a, const N: usize> = Receiver<'a, CriticalSectionRawMutex, Sample, N>;

pub fn new<'a, Cell: LoadCell, Stream: Write, const N: usize>(
    state: &'a mut State<N>,
    load_cell: Cell,
    stream: Stream,
    profile: Profile,
) -> (Runner<'a, Cell, Stream, N>, SampleReceiver<'a, N>) {
    let state: &'a State<N> = state;
    let runner = Runner {
        load_cell,
        stream,
        profile,
        samples: state.samples.sender(),
    };
    (runner, state.samples.receiver())
}

/// The sampler-framer task: tare once, then read, convert and frame one
/// torque value per sample period, forever. Samples are also published on
/// the state channel for an observer task; the wire write never waits on it.
pub struct Runner<'a, Cell: LoadCell, Stream: Write, const N: usize> {
    load_cell: Cell,
    stream: Stream,
    profile: Profile,
    samples: Sender<'a, CriticalSectionRawMutex, Sample, N>,
}

impl<'a, Cell: LoadCell, Stream: Write, const N: usize> Runner<'a, Cell, Stream, N> {
    pub async fn run(mut self) {
        self.init().await;
        let mut ticker = Ticker::every(self.profile.sample_period);
        loop {
            if self.sample_once().await.is_err() {
                warn!("Bench> frame write error");
            }
            ticker.next().await;
        }
    }

    /// Establish the zero-force baseline. No load may be on the bench yet.
    async fn init(&mut self) {
        self.load_cell.set_scale(self.profile.calibration_factor);
        self.load_cell.tare(TARE_SAMPLES).await;
        info!("Bench> tared, offset {}", self.load_cell.offset());
    }

    async fn sample_once(&mut self) -> Result<Sample, Stream::Error> {
        let units = self.load_cell.read_units().await;
        let mut torque = torque_nm(units, self.profile.torque_arm_length_mm);
        if self.profile.positive_only && torque < 0.0 {
            torque = 0.0;
        }
        let sample = Sample {
            torque_nm: torque,
            encoded: encode_centi(torque),
        };
        self.stream.write_all(&Frame::new(sample.encoded).encode()).await?;
        trace!("Bench> sample {}", sample.encoded);
        if self.samples.try_send(sample).is_err() {
            warn!("Bench> sample channel full, dropping");
        }
        Ok(sample)
    }
}
