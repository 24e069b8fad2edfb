//! Offline FIR filtering with truncated boundaries
//!
//! Convolves a complete buffer against a kernel, producing an output of the
//! same length as the input ("same" convolution). Terms that fall outside the
//! input are skipped rather than reflected or wrapped.

/// FIR filter holding a fixed kernel
#[derive(Debug, Clone)]
pub struct FirFilter {
    /// Filter coefficients h[n]
    coefficients: Vec<f64>,
}

impl FirFilter {
    /// Create a new FIR filter with given coefficients
    ///
    /// # Arguments
    /// * `coefficients` - Filter coefficients h[n] for n = 0..M-1
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Filter a complete buffer
    ///
    /// # Returns
    /// Filtered samples (same length as input)
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        apply(input, &self.coefficients)
    }

    /// Get filter length
    pub fn length(&self) -> usize {
        self.coefficients.len()
    }
}

/// Same-length convolution of `input` with `kernel`
///
/// y[i] = Σ x[i + j - M/2] * h[j], skipping indices outside the input.
/// An empty kernel yields zeros; an empty input yields an empty output.
pub fn apply(input: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = input.len();
    let half = kernel.len() / 2;

    (0..n)
        .map(|i| {
            let mut acc = 0.0;
            for (j, &coeff) in kernel.iter().enumerate() {
                let idx = i + j;
                if idx < half || idx - half >= n {
                    continue;
                }
                acc += input[idx - half] * coeff;
            }
            acc
        })
        .collect()
}
