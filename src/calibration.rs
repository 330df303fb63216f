use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};
use embedded_io_async::{Read, Write};
use heapless::{String, format};

use crate::sensor::load_cell::LoadCell;

const TARE_SAMPLES: usize = 10;
const BASELINE_SAMPLES: usize = 10;
const INPUT_POLL: Duration = Duration::from_millis(100);
const FACTOR_STEP: f32 = 0.1;
const LINE_SIZE: usize = 96;

pub fn new<Cell: LoadCell, Stream: Read + Write>(
    load_cell: Cell,
    stream: Stream,
    initial_factor: f32,
) -> Runner<Cell, Stream> {
    Runner {
        load_cell,
        stream,
        factor: initial_factor,
    }
}

/// Interactive calibration aid. Start it with no weight on the bench, place
/// a known weight once readings appear, then nudge the factor with `+`/`a`
/// and `-`/`z` until the echoed reading matches the reference force.
///
/// Developer utility, not part of the bench runtime.
pub struct Runner<Cell: LoadCell, Stream: Read + Write> {
    load_cell: Cell,
    stream: Stream,
    factor: f32,
}

impl<Cell: LoadCell, Stream: Read + Write> Runner<Cell, Stream> {
    pub async fn run(mut self) {
        if self.init().await.is_err() {
            warn!("Cal> banner write error");
        }
        loop {
            match self.step().await {
                Ok(true) => {}
                Ok(false) => return,
                Err(_e) => warn!("Cal> echo write error"),
            }
        }
    }

    /// Tare, then echo the usage banner and the zero-factor baseline. The
    /// zero factor lets permanent-mass setups skip the tare on later runs.
    async fn init(&mut self) -> Result<(), Stream::Error> {
        self.load_cell.set_scale(1.0);
        self.load_cell.tare(TARE_SAMPLES).await;
        let zero_factor = self.load_cell.read_average(BASELINE_SAMPLES).await;
        info!("Cal> zero factor {}", zero_factor);

        self.stream.write_all(b"HX711 calibration\r\n").await?;
        self.stream.write_all(b"Remove all weight from scale\r\n").await?;
        self.stream
            .write_all(b"After readings begin, place known weight on scale\r\n")
            .await?;
        self.stream
            .write_all(b"Press + or a to increase calibration factor\r\n")
            .await?;
        self.stream
            .write_all(b"Press - or z to decrease calibration factor\r\n")
            .await?;
        let line: String<LINE_SIZE> = format!("Zero factor: {}\r\n", zero_factor).unwrap_or_default();
        self.stream.write_all(line.as_bytes()).await?;
        Ok(())
    }

    /// One echo-and-poll iteration. Returns false once the input stream
    /// reports end of input; a live UART never does.
    async fn step(&mut self) -> Result<bool, Stream::Error> {
        self.load_cell.set_scale(self.factor);
        let units = self.load_cell.read_units().await;
        let line: String<LINE_SIZE> = format!(
            "Reading: {:.1} N x 100 calibration_factor: {:.2}\r\n",
            units, self.factor
        )
        .unwrap_or_default();
        self.stream.write_all(line.as_bytes()).await?;

        let mut byte = [0u8; 1];
        match select(self.stream.read(&mut byte), Timer::after(INPUT_POLL)).await {
            Either::First(Ok(0)) => return Ok(false),
            Either::First(Ok(_)) => self.adjust(byte[0]),
            Either::First(Err(e)) => return Err(e),
            Either::Second(()) => {}
        }
        Ok(true)
    }

    fn adjust(&mut self, byte: u8) {
        match byte {
            b'+' | b'a' => self.factor += FACTOR_STEP,
            b'-' | b'z' => self.factor -= FACTOR_STEP,
            _ => {}
        }
        debug!("Cal> calibration factor {}", self.factor);
    }
}
