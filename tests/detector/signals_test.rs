/*!
 * Leak Signal Tests
 * End-to-end scenarios for each analyzer plus aggregation order
 */

use leakwatch::{DetectorConfig, MemoryLeakDetector, MemoryMetrics};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

fn metrics(chrome_mb: f64, heap_mb: f64) -> MemoryMetrics {
    MemoryMetrics {
        chrome_memory_mb: chrome_mb,
        js_heap_mb: heap_mb,
        system_memory_percent: 40.0,
    }
}

/// Config with a single named window and thresholds high enough that only
/// the analyzer under test can fire.
fn quiet_config() -> DetectorConfig {
    let mut config = DetectorConfig::default();
    config.trend_analysis = BTreeMap::from([("short".to_string(), 300)]);
    config
        .detection_thresholds
        .chrome_process_memory
        .growth_rate_threshold_mb_per_min = 1_000_000.0;
    config
        .detection_thresholds
        .chrome_process_memory
        .total_growth_threshold_mb = 1_000_000.0;
    config
        .detection_thresholds
        .chrome_process_memory
        .percentage_growth_threshold = 1_000_000.0;
    config
        .detection_thresholds
        .js_heap_memory
        .no_gc_duration_threshold_seconds = 1_000_000;
    config
        .detection_thresholds
        .per_reload_analysis
        .cumulative_leak_per_reload_mb = 1_000_000.0;
    config
}

#[test]
fn test_linear_growth_yields_perfect_regression() {
    let mut detector = MemoryLeakDetector::new(quiet_config()).unwrap();
    let base = Instant::now();

    // 6 MB/minute = 0.1 MB/second, strictly linear
    for i in 0..120u64 {
        detector.ingest_at(
            &metrics(100.0 + 0.1 * i as f64, 50.0),
            0,
            base + Duration::from_secs(i),
        );
    }

    let trends = detector.trends();
    let trend = trends.get("short").expect("window should be populated");
    assert!((trend.r_squared - 1.0).abs() < 1e-9);
    assert!((trend.slope - 0.1).abs() < 1e-9);
    assert!((trend.growth_rate - 6.0).abs() < 1e-6);
}

#[test]
fn test_rapid_growth_signal_fires_above_rate_threshold() {
    let mut config = quiet_config();
    config
        .detection_thresholds
        .chrome_process_memory
        .growth_rate_threshold_mb_per_min = 10.0;
    let mut detector = MemoryLeakDetector::new(config).unwrap();
    let base = Instant::now();

    // 1 MB/second = 60 MB/minute
    let mut last = Vec::new();
    for i in 0..90u64 {
        last = detector.ingest_at(
            &metrics(100.0 + i as f64, 50.0),
            0,
            base + Duration::from_secs(i),
        );
    }

    assert!(last.contains(&"short_rapid_growth".to_string()));
    // Linear growth is also a high-confidence sustained trend
    assert!(last.contains(&"short_sustained_growth".to_string()));
}

#[test]
fn test_gc_recency_follows_heap_contractions() {
    let mut detector = MemoryLeakDetector::new(quiet_config()).unwrap();
    let base = Instant::now();

    detector.ingest_at(&metrics(200.0, 100.0), 0, base);
    detector.ingest_at(&metrics(200.0, 95.0), 0, base + Duration::from_secs(1));
    // 5% contraction: no GC recorded
    assert!(detector
        .statistics()
        .unwrap()
        .seconds_since_last_gc
        .is_none());

    detector.ingest_at(&metrics(200.0, 80.0), 0, base + Duration::from_secs(2));
    // 95 -> 80 is a ~16% contraction
    assert_eq!(
        detector.statistics().unwrap().seconds_since_last_gc,
        Some(0.0)
    );

    detector.ingest_at(&metrics(200.0, 80.0), 0, base + Duration::from_secs(12));
    assert_eq!(
        detector.statistics().unwrap().seconds_since_last_gc,
        Some(10.0)
    );
}

#[test]
fn test_stale_gc_signal() {
    let mut config = quiet_config();
    config
        .detection_thresholds
        .js_heap_memory
        .no_gc_duration_threshold_seconds = 10;
    let mut detector = MemoryLeakDetector::new(config).unwrap();
    let base = Instant::now();

    // Settle the baseline, then one collection at t=10
    for i in 0..10u64 {
        detector.ingest_at(&metrics(200.0, 100.0), 0, base + Duration::from_secs(i));
    }
    detector.ingest_at(&metrics(200.0, 80.0), 0, base + Duration::from_secs(10));

    let mut last = Vec::new();
    for i in 11..90u64 {
        last = detector.ingest_at(&metrics(200.0, 80.0), 0, base + Duration::from_secs(i));
    }

    // 79 seconds since the only GC, against a 10 second threshold
    assert_eq!(last, vec!["no_garbage_collection"]);
}

#[test]
fn test_never_observed_gc_signal_is_distinct() {
    let mut detector = MemoryLeakDetector::new(quiet_config()).unwrap();
    let base = Instant::now();

    let mut last = Vec::new();
    for i in 0..310u64 {
        last = detector.ingest_at(&metrics(200.0, 100.0), 0, base + Duration::from_secs(i));
    }

    assert_eq!(last, vec!["no_garbage_collection_detected"]);
}

#[test]
fn test_cumulative_reload_leak_thresholds() {
    for (threshold, expected) in [(10.0, true), (20.0, false)] {
        let mut config = quiet_config();
        config
            .detection_thresholds
            .per_reload_analysis
            .cumulative_leak_per_reload_mb = threshold;
        let mut detector = MemoryLeakDetector::new(config).unwrap();
        let base = Instant::now();

        // Boundary memory levels 200, 215, 230, 245: average delta 15
        let mut chrome_mb = 200.0;
        let mut reload_count = 0u64;
        let mut last = Vec::new();
        for i in 0..80u64 {
            if i > 0 && i % 20 == 0 {
                reload_count += 1;
                chrome_mb += 15.0;
            }
            last = detector.ingest_at(
                &metrics(chrome_mb, 50.0),
                reload_count,
                base + Duration::from_secs(i),
            );
        }

        assert_eq!(
            last.contains(&"cumulative_reload_leak".to_string()),
            expected,
            "threshold {threshold}"
        );
    }
}

#[test]
fn test_memory_spike_threshold() {
    let base_values = vec![100.0; 69];

    // 60% above the recent average: spike
    let mut detector = MemoryLeakDetector::new(quiet_config()).unwrap();
    let base = Instant::now();
    for (i, v) in base_values.iter().enumerate() {
        detector.ingest_at(&metrics(*v, 50.0), 0, base + Duration::from_secs(i as u64));
    }
    let signals = detector.ingest_at(&metrics(160.0, 50.0), 0, base + Duration::from_secs(69));
    assert_eq!(signals, vec!["memory_spike_detected"]);

    // 45% above: quiet
    let mut detector = MemoryLeakDetector::new(quiet_config()).unwrap();
    for (i, v) in base_values.iter().enumerate() {
        detector.ingest_at(&metrics(*v, 50.0), 0, base + Duration::from_secs(i as u64));
    }
    let signals = detector.ingest_at(&metrics(145.0, 50.0), 0, base + Duration::from_secs(69));
    assert!(!signals.contains(&"memory_spike_detected".to_string()));
}

#[test]
fn test_signal_aggregation_order() {
    // Trend signals come first, then GC, then per-reload, then spike
    let mut config = quiet_config();
    config
        .detection_thresholds
        .chrome_process_memory
        .growth_rate_threshold_mb_per_min = 1.0;
    config
        .detection_thresholds
        .per_reload_analysis
        .cumulative_leak_per_reload_mb = 5.0;
    let mut detector = MemoryLeakDetector::new(config).unwrap();
    let base = Instant::now();

    let mut chrome_mb = 100.0;
    let mut reload_count = 0u64;
    let mut last = Vec::new();
    for i in 0..80u64 {
        if i > 0 && i % 20 == 0 {
            reload_count += 1;
            chrome_mb += 40.0;
        }
        // Steady climb keeps the growth-rate signal firing
        chrome_mb += 0.5;
        last = detector.ingest_at(
            &metrics(chrome_mb, 50.0),
            reload_count,
            base + Duration::from_secs(i),
        );
    }

    let rapid = last
        .iter()
        .position(|s| s == "short_rapid_growth")
        .expect("rapid growth should fire");
    let reload = last
        .iter()
        .position(|s| s == "cumulative_reload_leak")
        .expect("reload leak should fire");
    assert!(rapid < reload);
}
