//! Software quadrature decoder over two digital inputs.

use embedded_hal::digital::InputPin;

use crate::error::HardwareError;
use crate::motor::ports::EncoderPort;

/// Count change for each `(previous << 2) | current` channel transition,
/// where a state is `(A << 1) | B`. Forward rotation runs 00 -> 10 -> 11 -> 01.
/// Transitions that change both channels at once are invalid and count zero.
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Quadrature encoder decoded by polling its A and B channels.
///
/// [`poll`](Self::poll) must run at least once per channel edge; the count is
/// refreshed again on every [`read_raw_count`](EncoderPort::read_raw_count).
pub struct QuadratureEncoder<A, B>
where
    A: InputPin,
    B: InputPin,
{
    channel_a: A,
    channel_b: B,
    state: u8,
    count: i64,
    skipped: u32,
    invert: bool,
}

impl<A, B> QuadratureEncoder<A, B>
where
    A: InputPin,
    B: InputPin,
{
    /// Create a decoder, sampling the current channel levels as the start state.
    pub fn new(channel_a: A, channel_b: B) -> Result<Self, HardwareError> {
        let mut encoder = Self {
            channel_a,
            channel_b,
            state: 0,
            count: 0,
            skipped: 0,
            invert: false,
        };
        encoder.state = encoder.sample()?;
        Ok(encoder)
    }

    /// Count in the opposite direction.
    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Sample both channels and accumulate the transition.
    pub fn poll(&mut self) -> Result<(), HardwareError> {
        let next = self.sample()?;
        if next != self.state {
            let delta = TRANSITIONS[usize::from((self.state << 2) | next)];
            if delta == 0 {
                self.skipped = self.skipped.saturating_add(1);
            }
            self.count += if self.invert { -i64::from(delta) } else { i64::from(delta) };
            self.state = next;
        }
        Ok(())
    }

    /// Accumulated count.
    #[inline]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Number of invalid double-edge transitions seen (polling too slow).
    #[inline]
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Release the channel pins.
    pub fn release(self) -> (A, B) {
        (self.channel_a, self.channel_b)
    }

    fn sample(&mut self) -> Result<u8, HardwareError> {
        let a = self.channel_a.is_high().map_err(|_| HardwareError::Encoder)?;
        let b = self.channel_b.is_high().map_err(|_| HardwareError::Encoder)?;
        Ok((u8::from(a) << 1) | u8::from(b))
    }
}

impl<A, B> EncoderPort for QuadratureEncoder<A, B>
where
    A: InputPin,
    B: InputPin,
{
    type Error = HardwareError;

    fn read_raw_count(&mut self) -> Result<i64, Self::Error> {
        self.poll()?;
        Ok(self.count)
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        self.count = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    fn levels(states: &[(State, State)]) -> (Vec<Transaction>, Vec<Transaction>) {
        let a = states.iter().map(|(a, _)| Transaction::get(*a)).collect();
        let b = states.iter().map(|(_, b)| Transaction::get(*b)).collect();
        (a, b)
    }

    #[test]
    fn test_forward_cycle_counts_four() {
        use State::{High, Low};
        let (a, b) = levels(&[
            (Low, Low),
            (High, Low),
            (High, High),
            (Low, High),
            (Low, Low),
        ]);
        let mut encoder = QuadratureEncoder::new(PinMock::new(&a), PinMock::new(&b)).unwrap();

        for _ in 0..4 {
            encoder.poll().unwrap();
        }
        assert_eq!(encoder.count(), 4);

        let (mut a, mut b) = encoder.release();
        a.done();
        b.done();
    }

    #[test]
    fn test_reverse_cycle_counts_down() {
        use State::{High, Low};
        let (a, b) = levels(&[(Low, Low), (Low, High), (High, High), (High, Low)]);
        let mut encoder = QuadratureEncoder::new(PinMock::new(&a), PinMock::new(&b)).unwrap();

        assert_eq!(encoder.read_raw_count().unwrap(), -1);
        assert_eq!(encoder.read_raw_count().unwrap(), -2);
        assert_eq!(encoder.read_raw_count().unwrap(), -3);

        let (mut a, mut b) = encoder.release();
        a.done();
        b.done();
    }

    #[test]
    fn test_double_edge_is_skipped() {
        use State::{High, Low};
        let (a, b) = levels(&[(Low, Low), (High, High)]);
        let mut encoder = QuadratureEncoder::new(PinMock::new(&a), PinMock::new(&b)).unwrap();

        encoder.poll().unwrap();
        assert_eq!(encoder.count(), 0);
        assert_eq!(encoder.skipped(), 1);

        let (mut a, mut b) = encoder.release();
        a.done();
        b.done();
    }

    #[test]
    fn test_reset_and_inversion() {
        use State::{High, Low};
        let (a, b) = levels(&[(Low, Low), (High, Low), (High, High)]);
        let mut encoder = QuadratureEncoder::new(PinMock::new(&a), PinMock::new(&b))
            .unwrap()
            .inverted(true);

        encoder.poll().unwrap();
        assert_eq!(encoder.count(), -1);
        encoder.reset().unwrap();
        encoder.poll().unwrap();
        assert_eq!(encoder.count(), -1);

        let (mut a, mut b) = encoder.release();
        a.done();
        b.done();
    }
}
