use super::*;

fn plan(name: &str) -> Plan {
    PLANS.into_iter().find(|p| p.name == name).unwrap()
}

#[test]
fn billing_period_defaults_to_monthly() {
    assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    assert_eq!(BillingPeriod::Monthly.suffix(), "/month");
    assert_eq!(BillingPeriod::Yearly.suffix(), "/year");
}

#[test]
fn price_follows_period() {
    let pro = plan("Professional");
    assert_eq!(pro.price(BillingPeriod::Monthly), 29);
    assert_eq!(pro.price(BillingPeriod::Yearly), 290);
}

#[test]
fn professional_yearly_saves_two_months() {
    let pro = plan("Professional");
    assert_eq!(pro.yearly_savings(), Some(58));
    assert_eq!(pro.savings_label(BillingPeriod::Yearly).as_deref(), Some("Save $58.00 yearly"));
}

#[test]
fn team_yearly_savings() {
    assert_eq!(plan("Team").savings_label(BillingPeriod::Yearly).as_deref(), Some("Save $198.00 yearly"));
}

#[test]
fn free_plan_never_shows_savings() {
    let basic = plan("Basic");
    assert_eq!(basic.yearly_savings(), None);
    assert_eq!(basic.savings_label(BillingPeriod::Yearly), None);
}

#[test]
fn monthly_view_never_shows_savings() {
    for plan in PLANS {
        assert_eq!(plan.savings_label(BillingPeriod::Monthly), None);
    }
}

#[test]
fn exactly_one_plan_is_highlighted_and_badged() {
    let highlighted: Vec<&str> = PLANS.iter().filter(|p| p.highlighted).map(|p| p.name).collect();
    assert_eq!(highlighted, ["Professional"]);
    assert_eq!(plan("Professional").badge, Some("Most Popular"));
    assert_eq!(PLANS.iter().filter(|p| p.badge.is_some()).count(), 1);
}
