pub mod mac_tests;

use ksig_tests::suites::constant_time::{summarize, TestConfig, TimingTester};

/// Runs both workloads interleaved and asserts the timings match
pub fn assert_constant_time<A, B>(operation: &str, config: &TestConfig, mut a: A, mut b: B)
where
    A: FnMut(),
    B: FnMut(),
{
    for _ in 0..config.num_warmup {
        a();
        b();
    }

    let tester = TimingTester::from_config(config);
    let (times_a, times_b) = tester.measure_pair(a, b);
    let analysis = tester
        .analyze(&times_a, &times_b, config)
        .unwrap_or_else(|e| panic!("{} analysis error: {}", operation, e));

    println!("{}", summarize(&analysis, operation));
    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: combined_score={:.3} (threshold {:.3})",
        operation, analysis.combined_score, config.combined_score_threshold
    );
}
