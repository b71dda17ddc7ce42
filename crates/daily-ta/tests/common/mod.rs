//! Shared test utilities for daily-ta tests.

use std::path::PathBuf;

use daily_ta::PriceFrame;

/// Looser epsilon for values accumulated through rolling sums.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Directory holding the JSON fixtures.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Compares two optional series cell by cell.
///
/// Absent cells must line up exactly; defined cells must agree within `eps`
/// relative to the larger magnitude (absolute below 1.0).
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[Option<f64>], expected: &[Option<f64>], eps: f64, label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: length");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (None, None) => {}
            (Some(a), Some(e)) => {
                let scale = a.abs().max(e.abs()).max(1.0);
                assert!(
                    (a - e).abs() <= eps * scale,
                    "{label}[{i}]: got {a}, expected {e}"
                );
            }
            _ => panic!("{label}[{i}]: got {a:?}, expected {e:?}"),
        }
    }
}

/// Number of leading absent cells.
#[allow(dead_code)]
pub fn absent_prefix(series: &[Option<f64>]) -> usize {
    series.iter().take_while(|v| v.is_none()).count()
}

/// Builds a frame with integer dates and fully populated OHLC(V) columns.
#[allow(dead_code)]
pub fn ohlcv_frame(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    volume: Option<&[f64]>,
) -> PriceFrame<u32> {
    let dates = (0..close.len()).map(|i| u32::try_from(i).unwrap()).collect();
    let mut frame = PriceFrame::new(dates);
    let cells = |v: &[f64]| v.iter().copied().map(Some).collect::<Vec<_>>();
    frame.insert_column("Open", cells(open)).unwrap();
    frame.insert_column("High", cells(high)).unwrap();
    frame.insert_column("Low", cells(low)).unwrap();
    frame.insert_column("Close", cells(close)).unwrap();
    if let Some(volume) = volume {
        frame.insert_column("Volume", cells(volume)).unwrap();
    }
    frame
}

/// Deterministic trending OHLCV data with every high above its low.
#[allow(dead_code)]
pub fn synthetic_ohlcv(size: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut open = Vec::with_capacity(size);
    let mut high = Vec::with_capacity(size);
    let mut low = Vec::with_capacity(size);
    let mut close = Vec::with_capacity(size);
    let mut volume = Vec::with_capacity(size);

    let mut price = 100.0;
    for i in 0..size {
        #[allow(clippy::cast_precision_loss)]
        let x = i as f64;
        price += (x * 0.3).sin() * 1.5 + 0.1;
        let o = price - (x * 0.7).cos() * 0.4;
        let c = price + (x * 0.5).sin() * 0.4;
        open.push(o);
        close.push(c);
        high.push(o.max(c) + 0.5 + (x * 0.11).sin().abs());
        low.push(o.min(c) - 0.5 - (x * 0.13).cos().abs());
        volume.push(1_000.0 + (x * 1.7).sin().abs() * 500.0);
    }
    (open, high, low, close, volume)
}
