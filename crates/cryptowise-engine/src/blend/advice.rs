//! Investment Advice
//!
//! Advice is an ordered list of fragment rules. Each rule looks at the
//! blended score, the asset and the profile and may contribute one
//! sentence; the sentences are joined in rule order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Asset, RiskTolerance, TimeHorizon, UserProfile};

/// Separator between advice fragments
pub const ADVICE_SEPARATOR: &str = " | ";

/// Inputs every advice rule sees
#[derive(Clone, Copy, Debug)]
pub struct AdviceContext<'a> {
    pub asset: &'a Asset,
    pub profile: &'a UserProfile,
    /// Risk-adjusted weighted score, before rounding
    pub score: Decimal,
}

type AdviceRule = fn(&AdviceContext<'_>) -> Option<&'static str>;

/// Sizing, then timing, then horizon
const ADVICE_RULES: [AdviceRule; 3] = [position_sizing, entry_timing, holding_horizon];

/// Evaluate every rule in order and collect the fragments that apply
pub fn fragments(ctx: &AdviceContext<'_>) -> Vec<&'static str> {
    ADVICE_RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

pub fn compose(ctx: &AdviceContext<'_>) -> String {
    fragments(ctx).join(ADVICE_SEPARATOR)
}

/// Always yields exactly one fragment
#[allow(clippy::unnecessary_wraps)]
fn position_sizing(ctx: &AdviceContext<'_>) -> Option<&'static str> {
    let fragment = if ctx.score >= dec!(7) && ctx.profile.risk_tolerance == RiskTolerance::High {
        "Consider a 15-25% portfolio allocation"
    } else if ctx.score >= dec!(4) {
        "Consider a 5-15% portfolio allocation"
    } else if ctx.score >= dec!(1) {
        "Consider a small 2-5% portfolio allocation"
    } else {
        "Avoid or minimal exposure (<2%)"
    };
    Some(fragment)
}

fn entry_timing(ctx: &AdviceContext<'_>) -> Option<&'static str> {
    let change = ctx.asset.price_change_24h;
    if change < dec!(-3) {
        Some("Current dip may present buying opportunity")
    } else if change > dec!(5) {
        Some("Consider dollar-cost averaging due to recent gains")
    } else {
        None
    }
}

fn holding_horizon(ctx: &AdviceContext<'_>) -> Option<&'static str> {
    match ctx.profile.time_horizon {
        TimeHorizon::Long if ctx.asset.fundamentals.project_viability >= 8 => {
            Some("Well-suited for long-term holding strategy")
        }
        TimeHorizon::Short => Some("Monitor closely for short-term trading opportunities"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fundamentals;

    fn asset(change_24h: Decimal, viability: u8) -> Asset {
        Asset::new("test", "Test", "TST")
            .with_price_changes(change_24h, Decimal::ZERO, Decimal::ZERO)
            .with_fundamentals(Fundamentals {
                project_viability: viability,
                ..Fundamentals::default()
            })
    }

    fn profile(risk: RiskTolerance, horizon: TimeHorizon) -> UserProfile {
        UserProfile {
            risk_tolerance: risk,
            time_horizon: horizon,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_sizing_tiers() {
        let a = asset(Decimal::ZERO, 5);
        let high = profile(RiskTolerance::High, TimeHorizon::Medium);
        let medium = UserProfile::default();

        let sizing = |score: Decimal, p: &UserProfile| {
            position_sizing(&AdviceContext { asset: &a, profile: p, score })
        };

        assert_eq!(sizing(dec!(7), &high), Some("Consider a 15-25% portfolio allocation"));
        assert_eq!(sizing(dec!(9), &medium), Some("Consider a 5-15% portfolio allocation"));
        assert_eq!(sizing(dec!(6.9), &high), Some("Consider a 5-15% portfolio allocation"));
        assert_eq!(sizing(dec!(1), &medium), Some("Consider a small 2-5% portfolio allocation"));
        assert_eq!(sizing(dec!(0.5), &high), Some("Avoid or minimal exposure (<2%)"));
    }

    #[test]
    fn test_timing_fragment() {
        let p = UserProfile::default();
        let ctx = |a: &Asset| entry_timing(&AdviceContext { asset: a, profile: &p, score: Decimal::ZERO });

        assert_eq!(ctx(&asset(dec!(-3.5), 5)), Some("Current dip may present buying opportunity"));
        assert_eq!(ctx(&asset(dec!(-3), 5)), None);
        assert_eq!(ctx(&asset(dec!(5), 5)), None);
        assert_eq!(ctx(&asset(dec!(5.1), 5)), Some("Consider dollar-cost averaging due to recent gains"));
    }

    #[test]
    fn test_horizon_fragment() {
        let strong = asset(Decimal::ZERO, 8);
        let weak = asset(Decimal::ZERO, 7);
        let long = profile(RiskTolerance::Medium, TimeHorizon::Long);
        let short = profile(RiskTolerance::Medium, TimeHorizon::Short);

        let check = |a: &Asset, p: &UserProfile| {
            holding_horizon(&AdviceContext { asset: a, profile: p, score: Decimal::ZERO })
        };

        assert_eq!(check(&strong, &long), Some("Well-suited for long-term holding strategy"));
        assert_eq!(check(&weak, &long), None);
        assert_eq!(check(&weak, &short), Some("Monitor closely for short-term trading opportunities"));
        assert_eq!(check(&strong, &UserProfile::default()), None);
    }

    #[test]
    fn test_compose_joins_in_order() {
        let a = asset(dec!(6.8), 8);
        let p = profile(RiskTolerance::High, TimeHorizon::Long);
        let advice = compose(&AdviceContext { asset: &a, profile: &p, score: dec!(11) });

        assert_eq!(
            advice,
            "Consider a 15-25% portfolio allocation | \
             Consider dollar-cost averaging due to recent gains | \
             Well-suited for long-term holding strategy"
        );
    }

    #[test]
    fn test_compose_sizing_only() {
        let a = asset(dec!(1), 5);
        let p = UserProfile::default();
        let ctx = AdviceContext { asset: &a, profile: &p, score: dec!(2) };
        assert_eq!(fragments(&ctx).len(), 1);
        assert_eq!(compose(&ctx), "Consider a small 2-5% portfolio allocation");
    }
}
