// Synthetic signal primitives used by the simulated series source
//
// None of these model real physics; they produce plausible-looking shapes
// for the dashboard charts. Output length is always exactly the requested
// count.
use crate::domain::telemetry::SpectrumBin;
use rand::Rng;

/// Uniform sample from `[lo, hi]`, tolerant of swapped or equal bounds.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if lo == hi {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wave {
    Sin,
    Cos,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub amplitude: f64,
    pub rate: f64,
    pub wave: Wave,
}

impl Term {
    fn at(&self, i: usize) -> f64 {
        let phase = i as f64 * self.rate;
        match self.wave {
            Wave::Sin => self.amplitude * phase.sin(),
            Wave::Cos => self.amplitude * phase.cos(),
        }
    }
}

/// Load-cycle style drift added to each random walk step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Periodic {
    pub amplitude: f64,
    pub period: f64,
}

impl Periodic {
    fn at(&self, i: usize) -> f64 {
        self.amplitude * (i as f64 / self.period).sin()
    }
}

/// `v[i] = clamp(v[i-1] + drift(i) + bias + uniform(-step, step), min, max)`
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalk {
    pub start: f64,
    pub step: f64,
    pub bias: f64,
    pub drift: Option<Periodic>,
    pub bounds: Option<(f64, f64)>,
}

impl RandomWalk {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
            bias: 0.0,
            drift: None,
            bounds: None,
        }
    }

    pub fn bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn drift(mut self, amplitude: f64, period: f64) -> Self {
        self.drift = Some(Periodic { amplitude, period });
        self
    }

    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min.min(max), max.max(min)));
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<f64> {
        let mut value = self.start;
        (0..count)
            .map(|i| {
                let drift = self.drift.map(|d| d.at(i)).unwrap_or(0.0);
                value += drift + self.bias + uniform(rng, -self.step, self.step);
                if let Some((min, max)) = self.bounds {
                    value = value.clamp(min, max);
                }
                value
            })
            .collect()
    }
}

/// `v[i] = baseline + sum(terms(i)) + uniform(noise.0, noise.1)`
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillation {
    pub baseline: f64,
    pub terms: Vec<Term>,
    pub noise: (f64, f64),
}

impl Oscillation {
    pub fn new(baseline: f64) -> Self {
        Self {
            baseline,
            terms: Vec::new(),
            noise: (0.0, 0.0),
        }
    }

    pub fn sin(mut self, amplitude: f64, rate: f64) -> Self {
        self.terms.push(Term {
            amplitude,
            rate,
            wave: Wave::Sin,
        });
        self
    }

    pub fn cos(mut self, amplitude: f64, rate: f64) -> Self {
        self.terms.push(Term {
            amplitude,
            rate,
            wave: Wave::Cos,
        });
        self
    }

    pub fn noise(mut self, lo: f64, hi: f64) -> Self {
        self.noise = (lo, hi);
        self
    }

    pub fn value_at<R: Rng + ?Sized>(&self, i: usize, rng: &mut R) -> f64 {
        let periodic: f64 = self.terms.iter().map(|t| t.at(i)).sum();
        self.baseline + periodic + uniform(rng, self.noise.0, self.noise.1)
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<f64> {
        (0..count).map(|i| self.value_at(i, rng)).collect()
    }

    /// Smallest and largest value this oscillation can produce.
    #[cfg(test)]
    pub fn envelope(&self) -> (f64, f64) {
        let swing: f64 = self.terms.iter().map(|t| t.amplitude.abs()).sum();
        let (lo, hi) = (self.noise.0.min(self.noise.1), self.noise.0.max(self.noise.1));
        (self.baseline - swing + lo, self.baseline + swing + hi)
    }
}

/// Rule-based spectrum: low noise everywhere except harmonic bins and an
/// optional fixed-amplitude bin. No transform of a time signal is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicSpectrum {
    /// Highest bin index; the spectrum covers `0..=bins`.
    pub bins: usize,
    pub bin_width_hz: f64,
    pub noise_ceiling: f64,
    pub harmonics: Vec<usize>,
    pub spike: (f64, f64),
    pub fixed: Option<(usize, f64)>,
}

impl HarmonicSpectrum {
    pub fn is_elevated(&self, bin: usize) -> bool {
        self.harmonics.contains(&bin) || self.fixed.is_some_and(|(b, _)| b == bin)
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<SpectrumBin> {
        (0..=self.bins)
            .map(|i| {
                let amplitude = match self.fixed {
                    Some((bin, amplitude)) if bin == i => amplitude,
                    _ if self.is_elevated(i) => uniform(rng, self.spike.0, self.spike.1),
                    _ => uniform(rng, 0.0, self.noise_ceiling),
                };
                SpectrumBin {
                    bin: i,
                    frequency: i as f64 * self.bin_width_hz,
                    amplitude,
                    phase: rng.gen_range(0.0..360.0),
                }
            })
            .collect()
    }
}
