use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub title: String,
    pub desc: String,
    pub paypal_id: String,
}

/// One-time purchase card. Just a form post to PayPal's hosted payment
/// page; the id is opaque here and PayPal owns its meaning.
#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let action = format!("{}/{}", config::get_payment_base_url(), props.paypal_id);

    html! {
        <div class="pricing-card">
            <h3>{&props.title}</h3>
            <div class="card-desc">{&props.desc}</div>
            <form class="paypal-form" {action} method="post" target="_blank">
                <input type="submit" value="Buy Now" class="paypal-buy-button" />
                <img src="https://www.paypalobjects.com/images/Debit_Credit_APM.svg" alt="cards" />
                <section class="paypal-note">
                    {"Powered by "}
                    <img
                        class="paypal-wordmark"
                        src="https://www.paypalobjects.com/paypal-ui/logos/svg/paypal-wordmark-color.svg"
                        alt="paypal"
                    />
                </section>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingBundleProps {
    pub title: String,
    pub desc: String,
    pub container_id: String,
}

/// Subscription card. The inner div is a mount point owned by the PayPal
/// SDK: when the hosting page has loaded the script, it finds the
/// container by id and replaces its contents with a live subscribe
/// button. We only guarantee the anchor stays put — constant props, no
/// state, so this component never renders over whatever the SDK put
/// there. Until then the fallback button is what the user sees.
#[function_component(PricingBundle)]
pub fn pricing_bundle(props: &PricingBundleProps) -> Html {
    html! {
        <div class="pricing-card">
            <h3>{&props.title}</h3>
            <div class="card-desc">{&props.desc}</div>
            <div class="bundle-mount">
                <div id={props.container_id.clone()} class="paypal-container">
                    <button class="paypal-fallback-button" title="PayPal script missing">
                        {"Subscribe"}
                    </button>
                    <img src="https://www.paypalobjects.com/images/Debit_Credit_APM.svg" alt="cards" />
                </div>
            </div>
        </div>
    }
}
