//! Pricing plans with a monthly/yearly switch, enterprise dialog, and FAQ.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Unit shown after the price, e.g. `/month`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/month",
            Self::Yearly => "/year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Whole US dollars per month.
    pub monthly: u32,
    /// Whole US dollars per year.
    pub yearly: u32,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub button_text: &'static str,
    pub badge: Option<&'static str>,
}

impl Plan {
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly,
            BillingPeriod::Yearly => self.yearly,
        }
    }

    /// Yearly discount versus twelve monthly payments, for paid plans only.
    pub fn yearly_savings(&self) -> Option<u32> {
        (self.monthly > 0).then(|| (self.monthly * 12).saturating_sub(self.yearly))
    }

    /// Savings line shown under the price, or `None` when it does not apply.
    pub fn savings_label(&self, period: BillingPeriod) -> Option<String> {
        match period {
            BillingPeriod::Monthly => None,
            BillingPeriod::Yearly => self.yearly_savings().map(|amount| format!("Save ${amount}.00 yearly")),
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Basic",
        description: "Perfect for individual developers",
        icon: "🚀",
        monthly: 0,
        yearly: 0,
        features: &["Basic STOMP testing", "Single connection", "Basic message inspector", "Community support", "Basic templates"],
        highlighted: false,
        button_text: "Get Started",
        badge: None,
    },
    Plan {
        name: "Professional",
        description: "Ideal for professional developers",
        icon: "💼",
        monthly: 29,
        yearly: 290,
        features: &[
            "Everything in Basic",
            "Multiple connections",
            "Advanced message inspector",
            "Message history",
            "Custom templates",
            "Priority email support",
            "Advanced security features",
            "API access",
        ],
        highlighted: true,
        button_text: "Start Free Trial",
        badge: Some("Most Popular"),
    },
    Plan {
        name: "Team",
        description: "Best for development teams",
        icon: "🗄",
        monthly: 99,
        yearly: 990,
        features: &[
            "Everything in Professional",
            "Team collaboration",
            "Role-based access",
            "Audit logging",
            "Custom plugins",
            "24/7 priority support",
            "Training sessions",
            "Custom integrations",
            "SLA guarantees",
        ],
        highlighted: false,
        button_text: "Contact Sales",
        badge: None,
    },
];

pub const ENTERPRISE_HIGHLIGHTS: [&str; 4] = ["Custom deployment", "24/7 support", "Advanced security", "Custom SLA"];

pub const ENTERPRISE_FEATURES: [&str; 8] = [
    "Custom deployment options",
    "Dedicated support team",
    "Custom SLA guarantees",
    "Advanced security features",
    "Custom integrations",
    "Unlimited connections",
    "Advanced analytics",
    "Training & onboarding",
];

pub const FAQ: [(&str, &str); 6] = [
    (
        "Can I change plans later?",
        "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards, PayPal, and wire transfers for enterprise customers.",
    ),
    ("Is there a free trial?", "Yes, all paid plans come with a 14-day free trial. No credit card required."),
    ("Do you offer refunds?", "Yes, we offer a 30-day money-back guarantee for all paid plans."),
    (
        "Do you offer technical support?",
        "Yes, all paid plans include technical support. Enterprise plans get 24/7 priority support.",
    ),
    (
        "Can I use Stompilot offline?",
        "Yes, Professional and Team plans include offline functionality with local message storage.",
    ),
];

#[component]
fn PlanCard(plan: Plan, period: ReadSignal<BillingPeriod>) -> impl IntoView {
    view! {
        <div class="plan-card" class:plan-card--highlighted=plan.highlighted>
            {plan.badge.map(|badge| view! { <span class="plan-card__badge">{badge}</span> })}
            <div class="plan-card__header">
                <span class="plan-card__icon">{plan.icon}</span>
                <h3 class="plan-card__name">{plan.name}</h3>
            </div>
            <p class="plan-card__description">{plan.description}</p>
            <div class="plan-card__price">
                <span class="plan-card__amount">{move || format!("${}", plan.price(period.get()))}</span>
                <span class="plan-card__unit">{move || period.get().suffix()}</span>
            </div>
            {move || plan.savings_label(period.get()).map(|label| view! { <p class="plan-card__savings">{label}</p> })}
            <ul class="check-list">
                {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <button class="btn plan-card__button" class:btn--primary=plan.highlighted>
                {plan.button_text}
            </button>
        </div>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let (period, set_period) = signal(BillingPeriod::default());
    let show_enterprise = RwSignal::new(false);

    let period_button = move |value: BillingPeriod| {
        view! {
            <button
                class="billing-toggle__option"
                class:billing-toggle__option--active=move || period.get() == value
                on:click=move |_| set_period.set(value)
            >
                {value.label()}
                {(value == BillingPeriod::Yearly).then(|| view! { <span class="billing-toggle__save">" Save 20%"</span> })}
            </button>
        }
    };

    view! {
        <div class="page pricing">
            <h1 class="page__title gradient-text">"Simple, Transparent Pricing"</h1>
            <p class="page__subtitle">"Choose the perfect plan for your development needs"</p>

            <div class="billing-toggle">
                {period_button(BillingPeriod::Monthly)}
                {period_button(BillingPeriod::Yearly)}
            </div>

            <div class="grid grid--3">
                {PLANS.into_iter().map(|plan| view! { <PlanCard plan=plan period=period/> }).collect_view()}
            </div>

            <div class="enterprise-card">
                <div class="enterprise-card__header">
                    <div>
                        <h3>"Enterprise"</h3>
                        <p>"Custom solutions for large organizations"</p>
                    </div>
                    <button class="btn btn--light" on:click=move |_| show_enterprise.set(true)>
                        "Learn More →"
                    </button>
                </div>
                <div class="enterprise-card__highlights">
                    {ENTERPRISE_HIGHLIGHTS.into_iter().map(|item| view! { <span>"✔ " {item}</span> }).collect_view()}
                </div>
            </div>

            <section class="faq">
                <h2 class="section-title">"Frequently Asked Questions"</h2>
                <div class="grid grid--2">
                    {FAQ
                        .into_iter()
                        .map(|(question, answer)| {
                            view! {
                                <div class="faq__item">
                                    <h3>{question}</h3>
                                    <p>{answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="pricing__cta">
                <h2>"Ready to get started?"</h2>
                <p>"Try Stompilot free for 14 days. No credit card required."</p>
                <button class="btn btn--primary btn--large">"Start Free Trial"</button>
            </section>

            <Show when=move || show_enterprise.get()>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <div class="dialog__header">
                            <h2>"Enterprise Features"</h2>
                            <button class="btn dialog__close" on:click=move |_| show_enterprise.set(false)>
                                "✕"
                            </button>
                        </div>
                        <div class="grid grid--2">
                            {ENTERPRISE_FEATURES.into_iter().map(|item| view! { <span>"✔ " {item}</span> }).collect_view()}
                        </div>
                        <div class="tip-box tip-box--info">
                            "Contact our sales team for custom pricing and deployment options tailored to your organization's needs."
                        </div>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_enterprise.set(false)>
                                "Close"
                            </button>
                            <button class="btn btn--primary">"Contact Sales"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
