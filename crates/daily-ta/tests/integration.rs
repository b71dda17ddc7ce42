//! End-to-end tests through the public API.

#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

mod common;

use common::{absent_prefix, assert_series_eq, ohlcv_frame, synthetic_ohlcv, LOOSE_EPSILON};
use daily_ta::prelude::*;
use daily_ta::{approx_eq, EPSILON};

#[test]
fn test_moving_average_worked_example() {
    let close = [10.0, 11.0, 12.0, 13.0, 14.0];
    let mut frame = ohlcv_frame(&close, &close, &close, &close, None);
    IndicatorEngine::new("X").add_moving_average(&mut frame, &[3]).unwrap();
    assert_eq!(
        frame.column("X_MA3").unwrap(),
        &[None, None, Some(11.0), Some(12.0), Some(13.0)]
    );
}

#[test]
fn test_relative_difference_zero_move_and_zero_open() {
    let rd = relative_difference(&[5.0, 0.0, 0.0], &[5.0, 0.0, 1.0]).unwrap();
    assert_eq!(rd[0], Some(0.0));
    assert_eq!(rd[1], Some(0.0));
    let large: f64 = rd[2].unwrap();
    assert!((large - 1e7).abs() / 1e7 < 1e-9);
}

#[test]
fn test_ema_seed_then_recursion() {
    let ema = exponential_moving_average(&[2.0, 4.0, 6.0, 8.0], 3).unwrap();
    assert_eq!(&ema[..2], &[None, None]);
    assert!(approx_eq(ema[2].unwrap(), 4.0, EPSILON));
    assert!(approx_eq(ema[3].unwrap(), 6.0, EPSILON));
}

#[test]
fn test_short_input_is_all_absent() {
    let close = [1.0, 2.0, 3.0];
    let mut frame = ohlcv_frame(&close, &close, &close, &close, None);
    let set = IndicatorSet {
        moving_average: vec![5],
        rsi: vec![5],
        week_high: vec![1],
        ..IndicatorSet::default()
    };
    let written = IndicatorEngine::new("S").apply(&mut frame, &set).unwrap();
    assert_eq!(written, vec!["S_MA5", "S_week_high_1", "S_RSI_5"]);
    for name in &written {
        assert!(frame.column(name).unwrap().iter().all(Option::is_none), "{name}");
    }
}

#[test]
fn test_huge_periods_are_all_absent() {
    let (open, high, low, close, volume) = synthetic_ohlcv(3);
    let huge = usize::MAX;
    let outputs = [
        moving_average(&close, huge).unwrap(),
        moving_average(&close, huge / 8).unwrap(),
        exponential_moving_average(&close, huge).unwrap(),
        average_relative_difference(&open, &close, huge).unwrap(),
        average_true_range(&high, &low, &close, huge).unwrap(),
        rsi(&open, &close, huge, RsiEviction::MatchValue).unwrap(),
        rsi(&open, &close, huge, RsiEviction::Tagged).unwrap(),
        stochastic_k(&high, &low, &close, huge).unwrap(),
        stochastic_d(&high, &low, &close, huge).unwrap(),
        momentum(&close, huge).unwrap(),
        williams_r(&high, &low, &close, huge).unwrap(),
        disparity(&close, huge).unwrap(),
        macd(&close, 2, huge).unwrap(),
        bollinger(&close, huge).unwrap().high,
        obv_stddev(&open, &close, &volume, huge).unwrap(),
        week_high(&high, huge / 8).unwrap(),
    ];
    for (i, series) in outputs.iter().enumerate() {
        assert_eq!(series.len(), 3, "output {i}");
        assert!(series.iter().all(Option::is_none), "output {i}");
    }

    assert!(matches!(
        week_low(&low, huge / 2),
        Err(Error::InvalidPeriod { .. })
    ));
}

#[test]
fn test_bollinger_middle_equals_moving_average() {
    let (open, high, low, close, _) = synthetic_ohlcv(50);
    let mut frame = ohlcv_frame(&open, &high, &low, &close, None);
    let engine = IndicatorEngine::new("B");
    engine.add_moving_average(&mut frame, &[10]).unwrap();
    engine.add_bollinger(&mut frame, &[10]).unwrap();

    let ma = frame.column("B_MA10").unwrap();
    let middle = frame.column("B_bollinger_middle_10").unwrap();
    assert_eq!(ma, middle);

    let high_band = frame.column("B_bollinger_high_10").unwrap();
    let low_band = frame.column("B_bollinger_low_10").unwrap();
    for i in 9..50 {
        let (h, m, l) = (high_band[i].unwrap(), middle[i].unwrap(), low_band[i].unwrap());
        assert!(h >= m && m >= l);
        assert!(approx_eq(h - m, m - l, LOOSE_EPSILON));
    }
}

#[test]
fn test_disparity_of_constant_series_is_one() {
    let close = [7.5; 12];
    let d = disparity(&close, 4).unwrap();
    assert_eq!(absent_prefix(&d), 3);
    assert!(d[3..].iter().all(|v| *v == Some(1.0)));
}

#[test]
fn test_flat_stochastic_window_fails_and_leaves_frame() {
    let price = [10.0; 6];
    let mut frame = ohlcv_frame(&price, &price, &price, &price, None);
    let before = frame.clone();
    let set = IndicatorSet {
        moving_average: vec![2],
        stochastic_k: vec![3],
        ..IndicatorSet::default()
    };
    let err = IndicatorEngine::new("F").apply(&mut frame, &set).unwrap_err();
    assert_eq!(
        err,
        Error::IndeterminateValue {
            indicator: "stochastic_k",
            index: 2
        }
    );
    assert_eq!(frame, before);
}

#[test]
fn test_obv_non_decreasing_on_up_days() {
    let open = [10.0, 11.0, 11.0, 12.0, 12.5];
    let close = [10.5, 11.0, 11.8, 12.0, 13.0];
    let volume = [100.0, 250.0, 80.0, 40.0, 10.0];
    let series = obv(&open, &close, &volume).unwrap();
    let values: Vec<f64> = series.iter().map(|v| v.unwrap()).collect();
    assert_eq!(values, vec![100.0, 350.0, 430.0, 470.0, 480.0]);
    assert!(values.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_warm_up_prefix_per_family() {
    let (open, high, low, close, volume) = synthetic_ohlcv(80);
    let mut frame = ohlcv_frame(&open, &high, &low, &close, Some(&volume));
    let set = IndicatorSet {
        daily_relative_change: true,
        average_relative_change: vec![4],
        moving_average: vec![6],
        exponential_moving_average: vec![5],
        average_true_range: vec![7],
        week_high: vec![2],
        week_low: vec![3],
        rsi: vec![9],
        stochastic_k: vec![5],
        stochastic_d: vec![4],
        momentum: vec![3],
        williams_r: vec![6],
        ad_oscillator: true,
        disparity: vec![8],
        macd: vec![(4, 9)],
        bollinger: vec![5],
        obv: true,
        obv_stddev: vec![3],
    };
    IndicatorEngine::new("W").apply(&mut frame, &set).unwrap();

    let expected = [
        ("W_relative_change_perc_1", relative_difference_lookback()),
        ("W_relative_change_perc_4", average_relative_difference_lookback(4)),
        ("W_MA6", moving_average_lookback(6)),
        ("W_EMA5", ema_lookback(5)),
        ("W_ATR7", atr_lookback(7)),
        ("W_week_high_2", week_extrema_lookback(2)),
        ("W_week_low_3", week_extrema_lookback(3)),
        ("W_RSI_9", rsi_lookback(9)),
        ("W_stochastic_K_5", stochastic_k_lookback(5)),
        ("W_stochastic_D_4_4", stochastic_d_lookback(4)),
        ("W_momentum_3", momentum_lookback(3)),
        ("W_williams_R_6", williams_r_lookback(6)),
        ("W_AD_oscillator", ad_oscillator_lookback()),
        ("W_disparity_8", disparity_lookback(8)),
        ("W_MACD_4_9", macd_lookback(4, 9)),
        ("W_bollinger_high_5", bollinger_lookback(5)),
        ("W_OBV", obv_lookback()),
        ("W_OBV_stdev_3", obv_stddev_lookback(3)),
    ];
    for (name, lookback) in expected {
        let column = frame.column(name).unwrap_or_else(|| panic!("missing {name}"));
        assert_eq!(absent_prefix(column), lookback, "{name}");
        assert!(column[lookback..].iter().all(Option::is_some), "{name}");
    }
    assert_eq!(week_extrema_lookback(2), 9);
    assert_eq!(macd_lookback(4, 9), 8);
}

#[test]
fn test_engine_from_json_config() {
    let config = EngineConfig::from_json_str(
        r#"{
            "instrument": "ETF",
            "columns": {"close": "Adj"},
            "indicators": {"moving_average": [3], "momentum": [2]}
        }"#,
    )
    .unwrap();

    let (open, high, low, close, _) = synthetic_ohlcv(10);
    let mut frame = ohlcv_frame(&open, &high, &low, &open, None);
    frame
        .insert_column("Adj", close.iter().copied().map(Some).collect())
        .unwrap();

    let written = IndicatorEngine::from_config(&config)
        .apply(&mut frame, &config.indicators)
        .unwrap();
    assert_eq!(written, vec!["ETF_MA3", "ETF_momentum_2"]);

    let expected_ma = moving_average(&close, 3).unwrap();
    assert_series_eq(frame.column("ETF_MA3").unwrap(), &expected_ma, 1e-12, "ETF_MA3");
    let momentum_col = frame.column("ETF_momentum_2").unwrap();
    assert!(approx_eq(momentum_col[2].unwrap(), close[2] - close[0], EPSILON));
}

#[test]
fn test_session_shares_dependencies() {
    let (open, high, low, close, volume) = synthetic_ohlcv(40);
    let data = Ohlcv::new(&open, &high, &low, &close, Some(&volume)).unwrap();
    let mut session = IndicatorSession::new(data, RsiEviction::MatchValue);

    session.series(&IndicatorKey::disparity(5)).unwrap();
    session.series(&IndicatorKey::bollinger(5)).unwrap();
    session.series(&IndicatorKey::obv_stddev(4)).unwrap();

    assert!(session.contains(&IndicatorKey::moving_average(5)));
    assert!(session.contains(&IndicatorKey::obv()));
    assert_eq!(session.len(), 5);

    let standalone = obv_stddev(&open, &close, &volume, 4).unwrap();
    let cached = session.series(&IndicatorKey::obv_stddev(4)).unwrap();
    assert_series_eq(cached, &standalone, 1e-12, "obv_stddev");
}
