use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;
use std::time::Instant;

use super::config::TestConfig;

/// Welch comparison of two timing sample sets
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

impl fmt::Display for TimingAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Mean times: {:.0} ns vs {:.0} ns", self.mean_a, self.mean_b)?;
        writeln!(f, "  Mean ratio: {:.3}", self.mean_ratio)?;
        writeln!(
            f,
            "  t-statistic: {:.3} (df {:.1}, p {:.4})",
            self.t_statistic, self.degrees_of_freedom, self.p_value
        )?;
        writeln!(f, "  Cohen's d: {:.3}", self.cohens_d)?;
        write!(f, "  Combined score: {:.3}", self.combined_score)
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            times.push(start.elapsed().as_nanos() / self.num_iterations.max(1) as u128);
        }
        times
    }

    /// Interleaves the two workloads sample by sample so drift in CPU
    /// frequency hits both sets equally.
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let single = Self::new(1, self.num_iterations);
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.extend(single.measure(&mut a));
            times_b.extend(single.measure(&mut b));
        }
        (times_a, times_b)
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drops samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let lower = q1 - 1.5 * iqr;
        let upper = q3 + 1.5 * iqr;

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    /// Two-tailed p-value of `t_stat` under Student's t with `df` degrees
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if !(df >= 1.0 && df.is_finite()) {
            return if t_stat.abs() < 2.0 { 0.5 } else { 0.01 };
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.5,
        }
    }

    // Weighted blend of the mean ratio, the t-statistic and the noisier
    // of the two relative spreads. 1.0 is a perfect match.
    fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    pub fn analyze(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let n_a = clean_a.len() as f64;
        let n_b = clean_b.len() as f64;
        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let var_a = Self::variance(&clean_a, mean_a);
        let var_b = Self::variance(&clean_b, mean_b);
        let std_dev_a = var_a.sqrt();
        let std_dev_b = var_b.sqrt();

        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);

        let term_a = var_a / n_a;
        let term_b = var_b / n_b;
        let t_statistic = (mean_a - mean_b).abs() / (term_a + term_b).sqrt();
        let degrees_of_freedom =
            (term_a + term_b).powi(2) / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0));
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        let cohens_d = (mean_a - mean_b).abs() / pooled;

        let rel_std_dev = (std_dev_a / mean_a).max(std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        // A small ratio is accepted even when the t-test resolves it.
        let is_constant_time = combined_score <= config.combined_score_threshold
            && (mean_ratio <= config.mean_ratio_max || t_statistic <= config.t_stat_threshold);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d,
            combined_score,
            is_constant_time,
        })
    }
}

/// One-paragraph verdict for test output
pub fn summarize(analysis: &TimingAnalysis, operation: &str) -> String {
    if analysis.is_constant_time {
        return format!("PASS: {} shows no input-dependent timing.\n{}", operation, analysis);
    }

    let diff_percent =
        (analysis.mean_a - analysis.mean_b).abs() / analysis.mean_a.min(analysis.mean_b) * 100.0;
    let mut out = format!(
        "FAIL: {} timing differs by {:.1}% between input classes.\n{}\n",
        operation, diff_percent, analysis
    );
    if analysis.mean_ratio > 1.5 && analysis.t_statistic > 15.0 {
        out.push_str("  Pattern: branch or early exit on secret data\n");
    } else if analysis.cohens_d > 0.8 && analysis.cohens_d < 1.5 {
        out.push_str("  Pattern: small but consistent leak\n");
    } else {
        out.push_str("  Pattern: noisy measurement, rerun on an idle machine\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_of_known_samples() {
        let times = [10u128, 12, 14, 16, 18];
        let mean = TimingTester::mean(&times);
        assert_eq!(mean, 14.0);
        assert_eq!(TimingTester::variance(&times, mean), 10.0);
    }

    #[test]
    fn outliers_are_dropped() {
        let times = [100u128, 101, 99, 100, 102, 98, 100, 10_000];
        let clean = TimingTester::remove_outliers(&times);
        assert_eq!(clean.len(), 7);
        assert!(!clean.contains(&10_000));
    }

    #[test]
    fn identical_distributions_pass() {
        let tester = TimingTester::new(8, 1);
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let b = [101u128, 99, 100, 102, 98, 100, 97, 103];
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(analysis.is_constant_time, "{}", analysis);
        assert!(analysis.p_value > 0.5);
    }

    #[test]
    fn disjoint_distributions_fail() {
        let tester = TimingTester::new(8, 1);
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let b = [200u128, 202, 198, 201, 199, 200, 203, 197];
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(!analysis.is_constant_time);
        assert!(summarize(&analysis, "demo").starts_with("FAIL"));
    }

    #[test]
    fn too_few_samples_is_an_error() {
        let tester = TimingTester::new(1, 1);
        assert!(tester.analyze(&[1], &[1], &TestConfig::default()).is_err());
    }
}
