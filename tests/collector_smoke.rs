use memswapcheck::check::{Thresholds, TOT_FREE_LABEL};
use memswapcheck::probe::run_probe;
use memswapcheck::system::{MetricsSource, SysinfoSource};

#[test]
fn reads_memory_and_swap_from_host() {
    let mut source = SysinfoSource::new();

    let memory = source.read_memory().expect("memory read failed");
    assert!(memory.total_bytes > 0);
    assert!(memory.available_bytes <= memory.total_bytes);
    assert!((0.0..=100.0).contains(&memory.used_percent));

    let swap = source.read_swap().expect("swap read failed");
    assert!((0.0..=100.0).contains(&swap.used_percent));
}

#[test]
fn full_probe_against_host_yields_total_free() {
    let mut source = SysinfoSource::default();
    let eval = run_probe(&mut source, &Thresholds::default()).expect("probe failed");

    let free = eval.total_free_percent.expect("host reports capacity");
    assert!((0.0..=100.0).contains(&free));

    let tot_free = eval
        .perf_data
        .iter()
        .find(|d| d.label == TOT_FREE_LABEL)
        .expect("missing TOT FREE datum");
    assert_eq!(tot_free.value, free);
}
