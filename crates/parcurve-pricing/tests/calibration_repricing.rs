//! Integration test: bootstrap a swap curve and verify it reprices its
//! own market quotes.
//!
//! Demo market (semiannual fixed leg, 6M zero-coupon deposit seed):
//!
//! | Tenor | Par Rate |
//! |-------|----------|
//! | 0.5Y  | 1.00% (ZCB seed) |
//! | 1Y    | 1.50%    |
//! | 2Y    | 1.90%    |
//! | 3Y    | 2.40%    |
//! | 5Y    | 3.15%    |
//! | 6Y    | 4.00%    |

use approx::assert_relative_eq;
use parcurve_curves::prelude::*;
use parcurve_pricing::prelude::*;

/// Seed pillar from the 6M zero-coupon deposit rate, converted outside
/// the core: DF = 1/(1 + q*tau), r = -ln(DF)/tau.
fn seed_curve(zcb_rate: f64) -> ZeroCurve {
    let df = 1.0 / (1.0 + zcb_rate * 0.5);
    let mut curve = ZeroCurve::new();
    curve.add_node(0.5, -df.ln() / 0.5).unwrap();
    curve
}

fn demo_quotes() -> Vec<SwapQuote> {
    vec![
        SwapQuote::new(1.0, 0.0150).unwrap(),
        SwapQuote::new(2.0, 0.0190).unwrap(),
        SwapQuote::new(3.0, 0.0240).unwrap(),
        SwapQuote::new(5.0, 0.0315).unwrap(),
        SwapQuote::new(6.0, 0.0400).unwrap(),
    ]
}

#[test]
fn dense_grid_reprices_to_machine_precision() {
    // Quotes at every semiannual grid point: each quote's coupon times
    // are all pillars by calibration time, so repricing is exact.
    let quotes = vec![
        SwapQuote::new(1.0, 0.0150).unwrap(),
        SwapQuote::new(1.5, 0.0170).unwrap(),
        SwapQuote::new(2.0, 0.0190).unwrap(),
        SwapQuote::new(2.5, 0.0215).unwrap(),
        SwapQuote::new(3.0, 0.0240).unwrap(),
    ];

    let curve = Bootstrapper::new(quotes.clone())
        .calibrate(seed_curve(0.0100))
        .unwrap();
    let pricer = SwapPricer::semiannual();

    let report =
        RepricingReport::from_quotes(&pricer, &curve, &quotes, tolerances::EXACT).unwrap();
    assert!(
        report.is_valid(),
        "dense grid should reprice exactly:\n{report}"
    );

    for quote in &quotes {
        let fair = pricer.fair_rate(&curve, quote.maturity()).unwrap();
        assert_relative_eq!(fair, quote.rate(), epsilon = 1e-9);
    }
}

#[test]
fn concrete_scenario_two_quotes() {
    // Seed (0.5, -ln(1/(1+0.01*0.5))/0.5), quotes {(1.0, 0.015), (2.0, 0.019)}
    let quotes = vec![
        SwapQuote::new(1.0, 0.0150).unwrap(),
        SwapQuote::new(2.0, 0.0190).unwrap(),
    ];
    let curve = Bootstrapper::new(quotes)
        .calibrate(seed_curve(0.0100))
        .unwrap();
    let pricer = SwapPricer::semiannual();

    let maturities: Vec<f64> = curve.pillars().map(|(t, _)| t).collect();
    assert_eq!(maturities, vec![0.5, 1.0, 2.0]);

    assert_relative_eq!(
        curve.zero_rate(1.0).unwrap(),
        0.014962686567858728,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        curve.zero_rate(2.0).unwrap(),
        0.018979174070683717,
        epsilon = 1e-12
    );

    // The 1Y swap's only coupon time (0.5) is a pillar: exact repricing.
    let npv_1y = pricer.price_swap(&curve, 1.0, 0.0150).unwrap();
    assert!(npv_1y.abs() < 1e-12, "1Y NPV was {npv_1y}");

    // The 2Y swap discounts its 1.5Y coupon by interpolation that the
    // solve could only extrapolate; the residual stays well inside the
    // sparse tolerance.
    let npv_2y = pricer.price_swap(&curve, 2.0, 0.0190).unwrap();
    assert!(npv_2y.abs() < 1e-4, "2Y NPV was {npv_2y}");
}

#[test]
fn demo_market_reprices_within_tolerance() {
    let quotes = demo_quotes();
    let curve = Bootstrapper::new(quotes.clone())
        .calibrate(seed_curve(0.0100))
        .unwrap();
    let pricer = SwapPricer::semiannual();

    let report =
        RepricingReport::from_quotes(&pricer, &curve, &quotes, tolerances::DEFAULT).unwrap();
    println!("{report}");
    assert!(report.is_valid(), "demo market failed repricing:\n{report}");

    for quote in &quotes {
        let fair = pricer.fair_rate(&curve, quote.maturity()).unwrap();
        assert!(
            (fair - quote.rate()).abs() < 5e-4,
            "fair rate at {}Y drifted: {} vs {}",
            quote.maturity(),
            fair,
            quote.rate()
        );
    }
}

#[test]
fn demo_market_pillar_values() {
    let curve = Bootstrapper::new(demo_quotes())
        .calibrate(seed_curve(0.0100))
        .unwrap();

    let expected = [
        (0.5, 0.00997508),
        (1.0, 0.01496269),
        (2.0, 0.01897917),
        (3.0, 0.02405476),
        (5.0, 0.03194605),
        (6.0, 0.04119180),
    ];

    assert_eq!(curve.len(), expected.len());
    for ((t, r), (et, er)) in curve.pillars().zip(expected) {
        assert_relative_eq!(t, et, epsilon = 1e-12);
        assert_relative_eq!(r, er, epsilon = 1e-7);
    }
}

#[test]
fn interpolated_swap_fair_rates() {
    // Fair rates for off-pillar maturities, as exported by the demo flow.
    let curve = Bootstrapper::new(demo_quotes())
        .calibrate(seed_curve(0.0100))
        .unwrap();
    let pricer = SwapPricer::semiannual();

    let fair_4y = pricer.fair_rate(&curve, 4.0).unwrap();
    let fair_4y7 = pricer.fair_rate(&curve, 4.7).unwrap();
    let fair_5y5 = pricer.fair_rate(&curve, 5.5).unwrap();

    assert_relative_eq!(fair_4y, 0.02787330766903936, epsilon = 1e-10);
    assert_relative_eq!(fair_4y7, 0.030515892867459194, epsilon = 1e-10);
    assert_relative_eq!(fair_5y5, 0.03591154625576139, epsilon = 1e-10);

    // Fair rates are increasing across this upward-sloping region
    assert!(fair_4y < fair_4y7 && fair_4y7 < fair_5y5);
}

#[test]
fn pillar_order_is_independent_of_quote_order() {
    let mut reversed = demo_quotes();
    reversed.reverse();

    let forward = Bootstrapper::new(demo_quotes())
        .calibrate(seed_curve(0.0100))
        .unwrap();
    let backward = Bootstrapper::new(reversed)
        .calibrate(seed_curve(0.0100))
        .unwrap();

    assert_eq!(forward, backward);

    let maturities: Vec<f64> = forward.pillars().map(|(t, _)| t).collect();
    let mut sorted = maturities.clone();
    sorted.sort_by(f64::total_cmp);
    assert_eq!(maturities, sorted);
}

#[test]
fn recalibration_is_idempotent() {
    let bootstrapper = Bootstrapper::new(demo_quotes());

    let first = bootstrapper.calibrate(seed_curve(0.0100)).unwrap();
    let second = bootstrapper.calibrate(first.clone()).unwrap();
    assert_eq!(first, second);
}
