#![allow(async_fn_in_trait)]

/// A bridge-ADC load cell, HX711 or compatible.
///
/// Raw reads are signed counts straight from the converter. `read_units`
/// removes the tare offset and divides by the scale factor, so the result
/// is in whatever physical unit the factor was calibrated against.
pub trait LoadCell {
    /// One raw signed count from the converter.
    async fn read(&mut self) -> i32;

    fn set_scale(&mut self, scale: f32);

    fn scale(&self) -> f32;

    fn set_offset(&mut self, offset: i32);

    fn offset(&self) -> i32;

    /// Integer mean of `samples` raw reads.
    async fn read_average(&mut self, samples: usize) -> i32 {
        let mut sum: i64 = 0;
        for _ in 0..samples {
            sum += self.read().await as i64;
        }
        (sum / samples.max(1) as i64) as i32
    }

    /// One reading with the tare offset removed and the scale applied.
    async fn read_units(&mut self) -> f32 {
        let raw = self.read().await;
        (raw.wrapping_sub(self.offset())) as f32 / self.scale()
    }

    /// Zero the cell by averaging `samples` reads. No load may be applied.
    async fn tare(&mut self, samples: usize) {
        let baseline = self.read_average(samples).await;
        self.set_offset(baseline);
    }
}


#[cfg(test)]
pub mod tests {
    use super::LoadCell;
    use super::mocks::ScriptedLoadCell;
    use approx::assert_relative_eq;

    #[tokio::test]
    async fn read_units_applies_offset_and_scale() {
        let mut cell = ScriptedLoadCell::new(&[250]).with_scale(10.0);
        cell.set_offset(50);
        assert_relative_eq!(cell.read_units().await, 20.0);
    }

    #[tokio::test]
    async fn read_average_is_the_integer_mean() {
        let mut cell = ScriptedLoadCell::new(&[4, 6, 5, 5]);
        assert_eq!(cell.read_average(4).await, 5);
    }

    #[tokio::test]
    async fn tare_zeroes_a_steady_baseline() {
        let mut cell = ScriptedLoadCell::new(&[20]).with_scale(10.0);
        cell.tare(10).await;
        assert_eq!(cell.offset(), 20);
        assert_relative_eq!(cell.read_units().await, 0.0);
    }
}
