//! Property-based tests for the order price calculator
//!
//! - Every monetary field is non-negative
//! - Wallet deduction never exceeds the balance or the post-promo subtotal
//! - Percentage promos never exceed their cap or the base subtotal
//! - Applying the wallet never raises the payable amount
//! - Extreme amounts saturate instead of panicking

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use shared::models::{
    AddOn, BenefitType, DayKey, DaySelection, DiscountType, Meal, Offer, Plan, SelectedAddOn,
    SubscriptionDraft, WeekType,
};
use subscription_engine::{
    OrderPriceCalculator, OrderSummary, PricingOptions, TrialPricing, UnsetAddOnDays,
};

// ============================================================================
// Strategies
// ============================================================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn arb_amount() -> impl Strategy<Value = f64> {
    // Whole and half units, including negatives to exercise clamping
    (-200i32..5000).prop_map(|v| f64::from(v) / 2.0)
}

fn arb_week_type() -> impl Strategy<Value = WeekType> {
    prop_oneof![
        Just(WeekType::MonFri),
        Just(WeekType::MonSat),
        Just(WeekType::Everyday),
        Just(WeekType::Unspecified),
    ]
}

fn arb_selection() -> impl Strategy<Value = DaySelection> {
    prop_oneof![
        Just(DaySelection::AllDays),
        Just(DaySelection::Unset),
        proptest::sample::subsequence(DayKey::ALL.to_vec(), 1..=7).prop_map(DaySelection::days),
    ]
}

fn arb_add_on() -> impl Strategy<Value = SelectedAddOn> {
    (0u32..100, arb_amount(), arb_selection()).prop_map(|(id, price, days)| {
        SelectedAddOn::new(AddOn::new(format!("a{}", id), "Add-on", price), days)
    })
}

fn arb_offer() -> impl Strategy<Value = Offer> {
    (
        prop_oneof![
            Just(DiscountType::Fixed),
            Just(DiscountType::Percentage),
            Just(DiscountType::Cashback),
        ],
        -50.0f64..500.0,
        proptest::option::of(-10.0f64..300.0),
        proptest::option::of(prop_oneof![Just(BenefitType::Amount), Just(BenefitType::Meal)]),
        any::<bool>(),
    )
        .prop_map(|(discount_type, value, max_discount, benefit_type, is_active)| Offer {
            id: "o1".into(),
            title: "Offer".into(),
            discount_type,
            discount_value: value,
            max_discount,
            benefit_type,
            promo_code: Some("CODE".into()),
            code: None,
            valid_from: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            valid_to: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
            is_active,
        })
}

prop_compose! {
    fn arb_draft()(
        meal_price in arb_amount(),
        has_plan in any::<bool>(),
        duration in 0u32..60,
        original in arb_amount(),
        discounted in arb_amount(),
        week_type in arb_week_type(),
        is_trial_mode in any::<bool>(),
        add_ons in proptest::collection::vec(arb_add_on(), 0..4),
        applied_offer in proptest::option::of(arb_offer()),
        wallet_applied in any::<bool>(),
        wallet_balance in arb_amount(),
    ) -> SubscriptionDraft {
        let plan = has_plan.then(|| Plan {
            id: "p".into(),
            name: "Plan".into(),
            duration,
            original_price: original,
            discounted_price: discounted,
            discount_percent: 0.0,
        });
        SubscriptionDraft {
            meal: Some(Meal::new("m1", "Meal", meal_price)),
            meal_variant: None,
            plan,
            week_type,
            is_trial_mode,
            add_ons,
            applied_offer,
            wallet_applied,
            wallet_balance,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        }
    }
}

fn arb_options() -> impl Strategy<Value = PricingOptions> {
    (
        prop_oneof![Just(TrialPricing::MealDoubling), Just(TrialPricing::PlanHalving)],
        prop_oneof![Just(UnsetAddOnDays::AllDays), Just(UnsetAddOnDays::FirstDay)],
        prop_oneof![Just(0.0), Just(29.0)],
    )
        .prop_map(|(trial_pricing, unset_add_on_days, delivery_fee)| PricingOptions {
            trial_pricing,
            unset_add_on_days,
            delivery_fee,
        })
}

fn arb_extreme_amount() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(5e28),
        Just(f64::MAX),
        Just(-f64::MAX),
        Just(1e15),
        1e20f64..7.9e28,
    ]
}

prop_compose! {
    fn arb_extreme_draft()(
        meal_price in arb_extreme_amount(),
        plan_price in arb_extreme_amount(),
        duration in prop_oneof![Just(u32::MAX), 1u32..400],
        is_trial_mode in any::<bool>(),
        add_on_prices in proptest::collection::vec(arb_extreme_amount(), 0..40),
        offer_value in arb_extreme_amount(),
        wallet_balance in arb_extreme_amount(),
    ) -> SubscriptionDraft {
        let mut draft = SubscriptionDraft::new(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .with_meal(Meal::new("m1", "Meal", meal_price))
            .with_plan(Plan {
                id: "p".into(),
                name: "Plan".into(),
                duration,
                original_price: plan_price,
                discounted_price: plan_price,
                discount_percent: 0.0,
            })
            .with_week_type(WeekType::Everyday)
            .with_trial(is_trial_mode)
            .with_offer(Offer {
                id: "o1".into(),
                title: "Offer".into(),
                discount_type: DiscountType::Percentage,
                discount_value: offer_value,
                max_discount: None,
                benefit_type: None,
                promo_code: Some("CODE".into()),
                code: None,
                valid_from: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                valid_to: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
                is_active: true,
            })
            .with_wallet(wallet_balance);
        for (i, price) in add_on_prices.into_iter().enumerate() {
            draft = draft.with_add_on(AddOn::new(format!("a{}", i), "Add-on", price), DaySelection::AllDays);
        }
        draft
    }
}

fn money_fields(s: &OrderSummary) -> [f64; 11] {
    [
        s.meal_total,
        s.add_on_total,
        s.subtotal,
        s.discount,
        s.trial_discount,
        s.promo_discount,
        s.wallet_applied_amount,
        s.delivery_fee,
        s.payable_amount,
        s.base_subtotal,
        s.subtotal_after_promo,
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn all_amounts_non_negative(draft in arb_draft(), options in arb_options()) {
        let summary = OrderPriceCalculator::new(options).summarize(&draft, now());
        for value in money_fields(&summary) {
            prop_assert!(value >= 0.0, "negative amount in {:?}", summary);
            prop_assert!(value.is_finite());
        }
        for line in &summary.add_on_lines {
            prop_assert!(line.line_total >= 0.0);
            prop_assert!(line.occurrences <= summary.duration);
        }
    }

    #[test]
    fn wallet_capped(draft in arb_draft(), options in arb_options()) {
        let summary = OrderPriceCalculator::new(options).summarize(&draft, now());
        prop_assert!(summary.wallet_applied_amount <= draft.wallet_balance.max(0.0));
        prop_assert!(summary.wallet_applied_amount <= summary.subtotal_after_promo);
        if !draft.wallet_applied {
            prop_assert_eq!(summary.wallet_applied_amount, 0.0);
        }
    }

    #[test]
    fn percentage_promo_capped(draft in arb_draft(), options in arb_options()) {
        let summary = OrderPriceCalculator::new(options).summarize(&draft, now());
        if let Some(offer) = &draft.applied_offer
            && offer.discount_type == DiscountType::Percentage
            && offer.benefit() == BenefitType::Amount
        {
            prop_assert!(summary.promo_discount <= summary.base_subtotal);
            if let Some(max) = offer.max_discount {
                // Amounts are rounded to 2 places after capping
                prop_assert!(summary.promo_discount <= max.max(0.0) + 0.005);
            }
        }
    }

    #[test]
    fn payable_is_after_promo_minus_wallet(draft in arb_draft(), options in arb_options()) {
        let summary = OrderPriceCalculator::new(options).summarize(&draft, now());
        let expected = (summary.subtotal_after_promo - summary.wallet_applied_amount).max(0.0);
        prop_assert!((summary.payable_amount - expected).abs() < 0.011);
    }

    #[test]
    fn wallet_never_raises_payable(mut draft in arb_draft(), options in arb_options()) {
        let calculator = OrderPriceCalculator::new(options);
        draft.wallet_applied = false;
        let without = calculator.summarize(&draft, now());
        draft.wallet_applied = true;
        let with = calculator.summarize(&draft, now());
        prop_assert!(with.payable_amount <= without.payable_amount);
    }

    #[test]
    fn summary_is_deterministic(draft in arb_draft(), options in arb_options()) {
        let calculator = OrderPriceCalculator::new(options);
        prop_assert_eq!(calculator.summarize(&draft, now()), calculator.summarize(&draft, now()));
    }

    #[test]
    fn extreme_amounts_saturate(draft in arb_extreme_draft(), options in arb_options()) {
        let summary = OrderPriceCalculator::new(options).summarize(&draft, now());
        for value in money_fields(&summary) {
            prop_assert!(value >= 0.0, "negative amount in {:?}", summary);
            prop_assert!(value.is_finite());
        }
        prop_assert!(summary.payable_amount <= summary.subtotal_after_promo);
    }
}
