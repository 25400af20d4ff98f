use std::rc::Rc;

use yew::prelude::*;
use web_sys::{window, Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
use chrono::Utc;
use gloo_timers::callback::{Interval, Timeout};

use crate::components::pricing::{PricingBundle, PricingCard};
use crate::holiday;
use crate::story::{self, StoryGenerator, StoryRequest, TemplateGenerator};

const GENERATION_DELAY_MS: u32 = 1_500;
const HOLIDAY_RECHECK_MS: u32 = 60_000;

#[function_component]
pub fn Home() -> Html {
    let form = use_state(StoryRequest::default);
    let generated_story = use_state(String::new);
    let is_generating = use_state(|| false);
    let show_holiday_decor = use_state(|| false);

    // Both timer handles live with the view and die with it.
    let pending_generation = use_mut_ref(|| None::<Timeout>);
    let holiday_interval = use_mut_ref(|| None::<Interval>);

    let generator: Rc<dyn StoryGenerator> = Rc::new(TemplateGenerator);

    // Check the decoration window once on mount, then once a minute in
    // case the page is left open across the cutoff.
    {
        let show_holiday_decor = show_holiday_decor.clone();
        let holiday_interval = holiday_interval.clone();
        let pending_generation = pending_generation.clone();
        use_effect_with_deps(
            move |_| {
                show_holiday_decor.set(holiday::decor_active(Utc::now()));

                let decor = show_holiday_decor.clone();
                let interval = Interval::new(HOLIDAY_RECHECK_MS, move || {
                    decor.set(holiday::decor_active(Utc::now()));
                });
                *holiday_interval.borrow_mut() = Some(interval);

                move || {
                    holiday_interval.borrow_mut().take();
                    pending_generation.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Runs the generator over a snapshot of the request. Scheduling a new
    // timeout drops any pending one, so the last invocation wins.
    let run_generation = {
        let generated_story = generated_story.clone();
        let is_generating = is_generating.clone();
        let pending_generation = pending_generation.clone();
        let generator = generator.clone();
        Callback::from(move |request: StoryRequest| {
            is_generating.set(true);

            let generated_story = generated_story.clone();
            let is_generating = is_generating.clone();
            let generator = generator.clone();
            let timeout = Timeout::new(GENERATION_DELAY_MS, move || {
                generated_story.set(generator.generate(&request));
                is_generating.set(false);
            });
            *pending_generation.borrow_mut() = Some(timeout);
        })
    };

    let on_generate = {
        let form = form.clone();
        let run_generation = run_generation.clone();
        Callback::from(move |_: MouseEvent| {
            run_generation.emit((*form).clone());
        })
    };

    let on_quick_story = {
        let form = form.clone();
        let show_holiday_decor = show_holiday_decor.clone();
        let run_generation = run_generation.clone();
        Callback::from(move |_: MouseEvent| {
            let cleared = story::quick_story_request(&form, *show_holiday_decor);
            form.set(cleared.clone());
            run_generation.emit(cleared);
        })
    };

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&input.name(), input.value());
            form.set(next);
        })
    };

    let on_select = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&select.name(), select.value());
            form.set(next);
        })
    };

    let on_holiday_toggle = {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.is_holiday_story = !next.is_holiday_story;
            form.set(next);
        })
    };

    let on_print = Callback::from(move |_: MouseEvent| {
        if let Some(window) = window() {
            if let Err(err) = window.print() {
                gloo_console::warn!("print dialog unavailable", err);
            }
        }
    });

    html! {
        <div class="storytime-container">
            {
                if *show_holiday_decor {
                    html! {
                        <div class="holiday-decor">
                            <div class="decor-trees">
                                <span class="decor-tree big">{"🎄"}</span>
                                <span class="decor-tree small">{"🎄"}</span>
                                <span class="decor-light gold"></span>
                                <span class="decor-light red"></span>
                            </div>
                            <div class="decor-wreath">
                                <span class="decor-bow">{"🎀"}</span>
                            </div>
                            <div class="decor-cookies">
                                <span class="decor-cookie">{"🍪"}</span>
                                <span class="decor-milk"></span>
                                <span class="decor-cookie small">{"🍪"}</span>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="storytime-content">
                <header class="storytime-header">
                    <div class="header-badge">
                        <span class="badge-dot"></span>
                        {"One free bedtime story per kid, per day – right from your browser."}
                    </div>
                    <div class="header-grid">
                        <div class="header-copy">
                            <h1><span class="brand">{"StoryTime"}</span>{" — Instant AI Bedtime Stories"}</h1>
                            <p>
                                {"Fill in a few details about your kiddo and their world, or tap “Quick Story” when you’re exhausted. \
                                  You’ll get a cozy, custom bedtime story on demand – and parents who want more can unlock instant bundles or unlimited access below."}
                            </p>
                        </div>
                        <div class="hero-book">
                            <svg viewBox="0 0 240 180" xmlns="http://www.w3.org/2000/svg">
                                <defs>
                                    <linearGradient id="pageGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                                        <stop offset="0%" stop-color="#fef3c7" />
                                        <stop offset="50%" stop-color="#fffbeb" />
                                        <stop offset="100%" stop-color="#fde68a" />
                                    </linearGradient>
                                </defs>
                                <path d="M20 140 C 20 140, 80 155, 120 155 C 160 155, 220 140, 220 140 L 220 150 C 220 150, 160 165, 120 165 C 80 165, 20 150, 20 150 Z" fill="#522500" />
                                <path d="M25 135 C 25 135, 80 148, 120 148 L 120 40 C 80 40, 25 55, 25 55 Z" fill="url(#pageGradient)" stroke="#d4d4d8" stroke-width="0.5" />
                                <path d="M215 135 C 215 135, 160 148, 120 148 L 120 40 C 160 40, 215 55, 215 55 Z" fill="url(#pageGradient)" stroke="#d4d4d8" stroke-width="0.5" />
                                <path d="M115 40 L 125 40 L 125 150 L 115 150 Z" fill="rgba(0,0,0,0.1)" />
                                <path d="M20 140 L 25 135 L 25 55 L 20 60 Z" fill="#92400e" />
                                <path d="M220 140 L 215 135 L 215 55 L 220 60 Z" fill="#92400e" />
                                <path d="M140 40 L 140 100 L 150 90 L 160 100 L 160 45" fill="#ef4444" />
                                <g opacity="0.4" stroke="#71717a" stroke-width="1">
                                    <line x1="40" y1="70" x2="100" y2="70" />
                                    <line x1="40" y1="80" x2="100" y2="80" />
                                    <line x1="40" y1="90" x2="90" y2="90" />
                                    <line x1="140" y1="70" x2="200" y2="70" />
                                    <line x1="140" y1="80" x2="200" y2="80" />
                                    <line x1="140" y1="90" x2="190" y2="90" />
                                </g>
                                <circle cx="20" cy="40" r="2" fill="#ffd140" class="twinkle" />
                                <circle cx="220" cy="30" r="3" fill="#ffd140" class="twinkle delayed" />
                                <circle cx="120" cy="20" r="2" fill="#fff" class="twinkle" />
                            </svg>
                        </div>
                    </div>
                </header>

                <main class="storytime-main">
                    <section class="panel builder-section">
                        <div class="builder-header">
                            <div>
                                <h2>{"Customize Tonight’s Story"}</h2>
                                <p>{"These details help shape the story. You get "}<strong>{"one free generated story per day"}</strong>{"."}</p>
                            </div>
                            {
                                if *show_holiday_decor {
                                    html! { <div class="holiday-spirit-badge">{"🎁 Holiday Spirit"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>

                        <div class="form-grid">
                            <div class="form-field">
                                <label>{"Child's Name"}</label>
                                <input
                                    type="text"
                                    name="childName"
                                    value={form.child_name.clone()}
                                    oninput={on_input.clone()}
                                    placeholder="Felicitee, Jay, Mateo..."
                                />
                            </div>
                            <div class="form-field">
                                <label>{"Age (Optional)"}</label>
                                <input
                                    type="number"
                                    name="age"
                                    value={form.age.clone()}
                                    oninput={on_input.clone()}
                                    placeholder="7"
                                    min="1"
                                    max="14"
                                />
                            </div>

                            <div class="form-field">
                                <label>{"Tone"}</label>
                                <select name="tone" value={form.tone.clone()} onchange={on_select.clone()}>
                                    <option value="silly and giggly">{"Silly / giggly"}</option>
                                    <option value="soft and sleepy">{"Soft & sleepy"}</option>
                                    <option value="brave and adventurous">{"Brave / adventurous"}</option>
                                    <option value="gentle and encouraging">{"Gentle & encouraging"}</option>
                                    <option value="magical and dreamy">{"Magical / dreamy"}</option>
                                </select>
                            </div>

                            <div class="form-field">
                                <label>{"Story Length"}</label>
                                <select name="length" value={form.length.clone()} onchange={on_select.clone()}>
                                    <option value="short">{"Short (3–5 minutes)"}</option>
                                    <option value="medium">{"Medium (7–10 minutes)"}</option>
                                    <option value="long">{"Long (10–15 minutes)"}</option>
                                </select>
                            </div>

                            {
                                // Only offered while the decorations are up.
                                if *show_holiday_decor {
                                    html! {
                                        <div class="form-field wide holiday-toggle-row">
                                            <div class="holiday-toggle-info">
                                                <span class="holiday-toggle-icon">{"🎄"}</span>
                                                <div>
                                                    <h3>{"Holiday Story Mode"}</h3>
                                                    <p>{"Add festive magic, decorations, and holiday themes."}</p>
                                                </div>
                                            </div>
                                            <label class="switch">
                                                <input
                                                    type="checkbox"
                                                    checked={form.is_holiday_story}
                                                    onchange={on_holiday_toggle.clone()}
                                                />
                                                <span class="slider round"></span>
                                            </label>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }

                            <div class="form-field wide">
                                <label>{"Custom Setting"}</label>
                                <select name="setting" value={form.setting.clone()} onchange={on_select.clone()}>
                                    <option value="">{"Surprise me"}</option>
                                    <option value="a cozy cabin in the snowy Alaska woods">{"Cozy cabin in snowy Alaska"}</option>
                                    <option value="a pirate ship sailing through the northern lights">{"Pirate ship under the northern lights"}</option>
                                    <option value="a floating sky island full of friendly dragons">{"Floating dragon island"}</option>
                                    <option value="a secret magic garden behind your house">{"Magic garden"}</option>
                                    <option value="a crystal city under the ocean">{"Crystal city under the ocean"}</option>
                                </select>
                            </div>

                            <div class="form-field">
                                <label>{"Tonight's Focus"}</label>
                                <select name="focus" value={form.focus.clone()} onchange={on_select.clone()}>
                                    <option value="">{"Just for fun"}</option>
                                    <option value="feeling safe at night">{"Feeling safe at night"}</option>
                                    <option value="being brave at school tomorrow">{"Brave for school tomorrow"}</option>
                                    <option value="trying new foods">{"Trying new foods"}</option>
                                    <option value="being kind to siblings and friends">{"Being kind to siblings"}</option>
                                    <option value="having big feelings but calming down gently">{"Calming big feelings"}</option>
                                </select>
                            </div>

                            <div class="form-field">
                                <label>{"Supporting Character"}</label>
                                <input
                                    type="text"
                                    name="supporting"
                                    value={form.supporting.clone()}
                                    oninput={on_input.clone()}
                                    placeholder="Little sister, pet dog..."
                                />
                            </div>
                        </div>

                        <div class="builder-actions">
                            <button class="generate-button" onclick={on_generate} disabled={*is_generating}>
                                { if *is_generating { "✨ Dreaming..." } else { "✨ Generate Story" } }
                            </button>
                            <button class="quick-button" onclick={on_quick_story}>
                                {"Quick Story (No Setup)"}
                            </button>
                        </div>
                    </section>

                    <section class="panel output-section">
                        <h2>{"Tonight’s Story"}</h2>
                        <p class="section-note">{"Your story appears below. You can listen with Read Aloud, read along, or print/save it."}</p>

                        <div class="story-box">
                            {
                                if generated_story.is_empty() {
                                    html! {
                                        <span class="story-placeholder">
                                            {"Your bedtime story will appear here. Start by filling in a few details above, or tap "}
                                            <strong>{"Quick Story"}</strong>
                                            {" for an instant tale."}
                                        </span>
                                    }
                                } else {
                                    html! { <>{(*generated_story).clone()}</> }
                                }
                            }
                        </div>

                        <div class="story-status">
                            <div class="story-chips">
                                <span class="chip">{format!("Length: {}", form.length)}</span>
                                <span class="chip">{format!("Tone: {}", form.tone)}</span>
                                {
                                    if form.is_holiday_story {
                                        html! { <span class="chip holiday">{"Holiday"}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            <div class="free-counter">{"Free stories left: "}<strong>{"1"}</strong></div>
                        </div>

                        <div class="form-field narrator-field">
                            <label>{"Narrator Voice"}</label>
                            <select>
                                <option value="">{"System Default"}</option>
                            </select>
                        </div>

                        <div class="story-actions">
                            <button class="story-action-button">{"▶ Read Aloud"}</button>
                            <button class="story-action-button">{"■ Stop"}</button>
                            <button class="story-action-button" onclick={on_print}>{"🖨 Print / Save PDF"}</button>
                        </div>
                    </section>

                    <section class="panel library-section">
                        <h2>{"Free Story Library"}</h2>
                        <p class="section-note">{"Ran out of free AI stories for today? Tap one of these pre-written favorites."}</p>
                        <div class="library-grid">
                            {
                                story::LIBRARY.iter().map(|entry| {
                                    let generated_story = generated_story.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        generated_story.set(entry.text.to_string());
                                    });
                                    html! {
                                        <div class="library-card" {onclick}>
                                            <div class="library-title">{entry.title}</div>
                                            <div class="library-meta">{entry.meta}</div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </section>

                    <section class="panel pricing-section">
                        <h2>{"Support StoryTime & Unlock More Magic"}</h2>
                        <p class="section-note">
                            {"Keep using one free story per day forever. When you’re ready for more, grab a single story, a bundle pack, or go unlimited. \
                              All payments processed securely by PayPal."}
                        </p>

                        <div class="pricing-grid">
                            <PricingCard
                                title="Short Story — $0.99"
                                desc="Perfect for quick tuck-ins and nap times."
                                paypal_id="2AMCMQHMGC2Z8"
                            />
                            <PricingCard
                                title="Medium Story — $1.49"
                                desc="Average bedtime, full adventure."
                                paypal_id="W56CVDP29HNPY"
                            />
                            <PricingCard
                                title="Long Story — $1.99"
                                desc="Extra-long nights, road trips, or 'one more story, please.'"
                                paypal_id="Z3KH75KY7EGSC"
                            />
                            <PricingCard
                                title="Bundle of 5 — $3.99"
                                desc="Great for busy weeks and sleepovers."
                                paypal_id="8RDSNCE864ZA6"
                            />
                            <PricingCard
                                title="Bundle of 10 — $7.99"
                                desc="Stock up for road trips and long winters."
                                paypal_id="RJBRQZ5VDFNGA"
                            />
                            <PricingBundle
                                title="Unlimited StoryTime — $19.99/mo"
                                desc="Unlimited stories for one household."
                                container_id="paypal-button-container-P-7AG37489BB000994CNERGJGQ"
                            />
                            <PricingBundle
                                title="Unlimited Family — $29.99/mo"
                                desc="For big families, co-parents, or shared households."
                                container_id="paypal-button-container-P-5WR418139G939580ENERGPZY"
                            />
                        </div>

                        <p class="pricing-note">
                            {"Note: StoryTime is currently in early-access preview. All stories are generated on-device using templates and your inputs."}
                        </p>
                    </section>
                </main>

                <footer class="storytime-footer">
                    {"© 2025 Cyphernex Systems. All rights reserved. For personal use only."}
                </footer>
            </div>

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #050816;
                    color: #f9fbff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .storytime-container {
                    position: relative;
                    min-height: 100vh;
                    padding-bottom: 4rem;
                }

                .storytime-content {
                    position: relative;
                    z-index: 1;
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 1.5rem 1rem;
                }

                ::selection {
                    background: #ffd140;
                    color: #000;
                }

                /* Seasonal decoration layer, pointer-transparent */
                .holiday-decor {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    z-index: 0;
                }

                .decor-trees {
                    position: absolute;
                    top: 0.5rem;
                    left: 0.5rem;
                    opacity: 0.85;
                }

                .decor-tree.big {
                    font-size: 3.5rem;
                    filter: drop-shadow(0 0 10px rgba(74, 222, 128, 0.5));
                }

                .decor-tree.small {
                    font-size: 2.2rem;
                    margin-left: -0.75rem;
                    filter: drop-shadow(0 0 10px rgba(5, 150, 105, 0.5));
                }

                .decor-light {
                    display: inline-block;
                    width: 5px;
                    height: 5px;
                    border-radius: 50%;
                    margin-left: 0.3rem;
                    animation: twinkle 1.6s ease-in-out infinite;
                }

                .decor-light.gold { background: #fde047; }
                .decor-light.red { background: #f87171; animation-delay: 0.4s; }

                .decor-wreath {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    width: 5rem;
                    height: 5rem;
                    border: 4px dashed #15803d;
                    border-radius: 50%;
                    display: flex;
                    align-items: flex-start;
                    justify-content: center;
                    opacity: 0.9;
                    filter: drop-shadow(0 0 15px rgba(20, 83, 45, 0.8));
                }

                .decor-bow {
                    font-size: 1.6rem;
                    margin-top: -1rem;
                }

                .decor-cookies {
                    position: absolute;
                    bottom: 10rem;
                    right: 2rem;
                    transform: rotate(12deg);
                    opacity: 0.9;
                    display: flex;
                    align-items: flex-end;
                    gap: 0.4rem;
                }

                .decor-cookie { font-size: 2.2rem; }
                .decor-cookie.small { font-size: 1.6rem; }

                .decor-milk {
                    width: 2rem;
                    height: 3rem;
                    background: linear-gradient(to top, #fff 65%, rgba(255, 255, 255, 0.2) 65%);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    border-radius: 0 0 6px 6px;
                }

                @keyframes twinkle {
                    0%, 100% { opacity: 0.3; }
                    50% { opacity: 1; }
                }

                .twinkle { animation: twinkle 1.6s ease-in-out infinite; }
                .twinkle.delayed { animation-delay: 0.5s; }

                /* Header */
                .storytime-header { margin-bottom: 2rem; }

                .header-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 209, 64, 0.35);
                    border-radius: 999px;
                    padding: 0.3rem 0.8rem;
                    margin-bottom: 1rem;
                    font-size: 0.75rem;
                    color: #ffeb8a;
                }

                .badge-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #4ade80;
                    box-shadow: 0 0 8px rgba(74, 222, 128, 0.9);
                }

                .header-grid {
                    display: grid;
                    grid-template-columns: 1.6fr 1.3fr;
                    gap: 1.5rem;
                    align-items: center;
                }

                .header-copy h1 {
                    font-size: 2.6rem;
                    margin: 0 0 0.75rem;
                    letter-spacing: -0.02em;
                }

                .header-copy .brand { color: #ffd140; }

                .header-copy p {
                    color: #a5b4cf;
                    font-size: 0.95rem;
                    line-height: 1.6;
                    max-width: 36rem;
                    margin: 0;
                }

                .hero-book {
                    display: flex;
                    justify-content: center;
                }

                .hero-book svg {
                    width: 14rem;
                    height: 12rem;
                    filter: drop-shadow(0 18px 35px rgba(0, 0, 0, 0.75));
                    transition: transform 0.5s ease;
                }

                .hero-book svg:hover { transform: scale(1.05); }

                /* Shared panel chrome */
                .storytime-main {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .panel {
                    background: rgba(10, 18, 40, 0.96);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 20px;
                    padding: 1.5rem;
                    box-shadow: 0 18px 45px rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(12px);
                }

                .panel h2 {
                    font-size: 1.3rem;
                    margin: 0 0 0.5rem;
                }

                .section-note {
                    color: #a5b4cf;
                    font-size: 0.88rem;
                    margin: 0 0 1rem;
                }

                /* Builder */
                .builder-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }

                .builder-header p {
                    color: #a5b4cf;
                    font-size: 0.88rem;
                    margin: 0;
                }

                .holiday-spirit-badge {
                    background: rgba(127, 29, 29, 0.3);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                    border-radius: 999px;
                    padding: 0.3rem 0.8rem;
                    font-size: 0.7rem;
                    color: #fecaca;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-weight: 700;
                    white-space: nowrap;
                }

                .form-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .form-field { display: flex; flex-direction: column; gap: 0.3rem; }
                .form-field.wide { grid-column: span 2; }

                .form-field label {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: #a5b4cf;
                    margin-left: 0.25rem;
                }

                .form-field input,
                .form-field select {
                    width: 100%;
                    box-sizing: border-box;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 999px;
                    padding: 0.65rem 1rem;
                    background: rgba(9, 13, 28, 0.9);
                    color: #f9fbff;
                    font-size: 0.88rem;
                    outline: none;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }

                .form-field input::placeholder { color: rgba(255, 255, 255, 0.2); }

                .form-field input:focus,
                .form-field select:focus {
                    border-color: rgba(255, 209, 64, 0.6);
                    box-shadow: 0 0 0 1px rgba(255, 209, 64, 0.4);
                }

                .holiday-toggle-row {
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    background: linear-gradient(to right, rgba(127, 29, 29, 0.2), rgba(20, 83, 45, 0.2));
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1rem;
                }

                .holiday-toggle-info {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .holiday-toggle-icon {
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 50%;
                    padding: 0.4rem;
                    font-size: 1.2rem;
                }

                .holiday-toggle-info h3 {
                    margin: 0;
                    font-size: 0.88rem;
                    color: #ffeb8a;
                }

                .holiday-toggle-info p {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #a5b4cf;
                }

                .switch {
                    position: relative;
                    display: inline-block;
                    width: 44px;
                    height: 24px;
                    flex-shrink: 0;
                }

                .switch input { opacity: 0; width: 0; height: 0; }

                .slider {
                    position: absolute;
                    cursor: pointer;
                    inset: 0;
                    background: #374151;
                    transition: background 0.3s ease;
                }

                .slider.round { border-radius: 24px; }

                .slider:before {
                    content: "";
                    position: absolute;
                    height: 16px;
                    width: 16px;
                    left: 4px;
                    bottom: 4px;
                    background: #fff;
                    border-radius: 50%;
                    transition: transform 0.3s ease;
                }

                .switch input:checked + .slider { background: #16a34a; }
                .switch input:checked + .slider:before { transform: translateX(20px); }

                .builder-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                    align-items: center;
                }

                .generate-button {
                    background: linear-gradient(to bottom right, #ffd140, #ffb400);
                    color: #1b1300;
                    font-weight: 700;
                    font-size: 0.95rem;
                    border: none;
                    border-radius: 999px;
                    padding: 0.65rem 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 12px 25px rgba(0, 0, 0, 0.6);
                    transition: all 0.2s ease;
                }

                .generate-button:hover:not(:disabled) {
                    transform: translateY(-1px);
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.7);
                }

                .generate-button:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                }

                .quick-button {
                    background: rgba(255, 255, 255, 0.05);
                    color: #ffeb8a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    font-weight: 600;
                    font-size: 0.9rem;
                    padding: 0.65rem 1.25rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .quick-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: translateY(-1px);
                }

                /* Output */
                .story-box {
                    min-height: 200px;
                    background: radial-gradient(circle at 0 0, rgba(255, 209, 64, 0.12), rgba(8, 12, 32, 0.96));
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 18px;
                    padding: 1.5rem;
                    font-size: 0.96rem;
                    line-height: 1.7;
                    white-space: pre-wrap;
                }

                .story-placeholder { color: #a5b4cf; }

                .story-status {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: #a5b4cf;
                }

                .story-chips { display: flex; gap: 0.5rem; flex-wrap: wrap; }

                .chip {
                    background: rgba(6, 10, 26, 0.9);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                }

                .chip.holiday {
                    background: rgba(127, 29, 29, 0.4);
                    border-color: rgba(239, 68, 68, 0.3);
                    color: #fecaca;
                }

                .free-counter strong { color: #ffd140; }

                .narrator-field {
                    max-width: 18rem;
                    margin-top: 1rem;
                }

                .story-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }

                .story-action-button {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    color: #f9fbff;
                    border-radius: 999px;
                    padding: 0.5rem 1rem;
                    font-size: 0.85rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .story-action-button:hover { background: rgba(255, 255, 255, 0.05); }

                /* Library */
                .library-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                }

                .library-card {
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(9, 13, 30, 0.96);
                    border-radius: 12px;
                    padding: 0.75rem;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .library-card:hover {
                    border-color: rgba(255, 209, 64, 0.5);
                    background: rgba(15, 22, 48, 0.98);
                    transform: translateY(-1px);
                }

                .library-title {
                    color: #ffeb8a;
                    font-weight: 600;
                    font-size: 0.88rem;
                    margin-bottom: 0.25rem;
                }

                .library-meta {
                    font-size: 0.75rem;
                    color: #a5b4cf;
                }

                /* Pricing */
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .pricing-card {
                    background: radial-gradient(circle at 0 0, rgba(255, 209, 64, 0.15), rgba(7, 9, 26, 0.97));
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 18px;
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    box-shadow: 0 18px 38px rgba(0, 0, 0, 0.7);
                }

                .pricing-card h3 {
                    margin: 0;
                    font-size: 1rem;
                    color: #fff;
                }

                .card-desc {
                    font-size: 0.85rem;
                    font-weight: 600;
                    color: #ffeb8a;
                }

                .paypal-form {
                    margin-top: 0.5rem;
                    display: inline-grid;
                    justify-items: center;
                    gap: 0.5rem;
                }

                .paypal-buy-button {
                    text-align: center;
                    border: none;
                    border-radius: 4px;
                    background: #ffd140;
                    color: #000;
                    font-weight: 700;
                    font-size: 1rem;
                    height: 2.625rem;
                    min-width: 11.625rem;
                    padding: 0 2rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .paypal-buy-button:hover { background: #ffc107; }

                .paypal-note {
                    font-size: 0.75rem;
                    color: #a5b4cf;
                }

                .paypal-note .paypal-wordmark {
                    height: 0.875rem;
                    vertical-align: middle;
                    margin-left: 0.25rem;
                }

                .bundle-mount { margin-top: 0.5rem; position: relative; }

                .paypal-container {
                    min-height: 40px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .paypal-fallback-button {
                    background: #ffd140;
                    color: #000;
                    font-weight: 700;
                    font-size: 0.85rem;
                    border: none;
                    border-radius: 4px;
                    height: 2.625rem;
                    width: 100%;
                    max-width: 200px;
                    opacity: 0.8;
                    cursor: not-allowed;
                }

                .paypal-container img { height: 1rem; }

                .pricing-note {
                    font-size: 0.75rem;
                    color: #a5b4cf;
                    opacity: 0.7;
                    margin: 1rem 0 0;
                }

                .storytime-footer {
                    margin-top: 2rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #a5b4cf;
                    padding: 1rem 0;
                }

                @media (max-width: 768px) {
                    .header-grid { grid-template-columns: 1fr; }
                    .header-copy h1 { font-size: 1.9rem; }
                    .decor-wreath { display: none; }
                    .form-grid { grid-template-columns: 1fr; }
                    .form-field.wide { grid-column: span 1; }
                    .library-grid { grid-template-columns: 1fr; }
                    .pricing-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
